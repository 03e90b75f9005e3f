use strum::{Display, EnumIs};

/// What the UI loop should do after an event went through a handler.
#[derive(Clone, Debug, Default, Eq, PartialEq, EnumIs, Display)]
pub enum RenderKind {
  #[default]
  Render,
  NoOps,
  /// The popup that received the event completed with a value.
  Handled,
  /// The popup that received the event was dismissed.
  Canceled,
  Exit,
}

macro_rules! impl_variants {
  ($($variant:ident => $kind:ident),+ $(,)?) => {
    impl RenderEvent {
      $(
        pub fn $variant() -> Self {
          Self { kind: RenderKind::$kind }
        }
      )+
    }
  };
}

impl_variants! {
  render => Render,
  no_ops => NoOps,
  handled => Handled,
  canceled => Canceled,
  exit => Exit,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenderEvent {
  pub kind: RenderKind,
}
