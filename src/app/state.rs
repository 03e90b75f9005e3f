use ratatui::prelude::Stylize;
use ratatui::style::Color;
use ratatui::text::Span;
use strum::{Display, EnumIs};

#[derive(Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Display, EnumIs)]
pub enum State {
  #[default]
  Idle,
  /// The engine is running; pickers and the convert action are refused.
  Converting,
  Exit,
}

impl State {
  pub fn color_str(&self) -> (Color, &'static str) {
    match *self {
      State::Idle => (Color::Rgb(153, 153, 153), "IDLE"),
      State::Converting => (Color::Rgb(34, 255, 0), "CONVERTING"),
      State::Exit => (Color::Red, "EXIT"),
    }
  }

  pub fn as_spans(&self) -> [Span<'static>; 5] {
    let (color, text) = self.color_str();
    [
      Span::raw(" "),
      Span::raw(ratatui::symbols::DOT).fg(color),
      Span::raw(" "),
      Span::raw(text).fg(Color::White),
      Span::raw(" "),
    ]
  }
}
