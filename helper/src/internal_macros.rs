#[macro_export]
macro_rules! __keys_single {
  ($key:ident($val:tt)) => {
    ::crossterm::event::KeyEvent {
      code: ::crossterm::event::KeyCode::$key($val),
      ..
    }
  };
  ($key:ident) => {
    ::crossterm::event::KeyEvent {
      code: ::crossterm::event::KeyCode::$key,
      ..
    }
  };
}

#[macro_export]
macro_rules! __keys_with_mods_kind {
  ($key:ident($val:tt), $($mods:ident)|+, $kind:ident) => {
    ::crossterm::event::KeyEvent {
      code: ::crossterm::event::KeyCode::$key($val),
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      kind: ::crossterm::event::KeyEventKind::$kind,
      ..
    }
  };
  ($key:ident, $($mods:ident)|+, $kind:ident) => {
    ::crossterm::event::KeyEvent {
      code: ::crossterm::event::KeyCode::$key,
      modifiers: $(::crossterm::event::KeyModifiers::$mods)|+,
      kind: ::crossterm::event::KeyEventKind::$kind,
      ..
    }
  };
}

/// Builds a `KeyEvent` pattern.
///
/// Bare codes and `A | B` alternatives match any modifiers and kind; the three
/// part form pins modifiers and kind exactly.
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
/// assert!(matches!(key, helper::keys!(Char('c'), CONTROL, Press)));
/// assert!(matches!(key, helper::keys!(Char('c') | Char('C'))));
/// assert!(!matches!(key, helper::keys!(Char('c'), NONE, Press)));
/// ```
#[macro_export]
macro_rules! keys {
  ($key1:ident($val1:tt) | $key2:ident($val2:tt)) => {
    ::crossterm::event::KeyEvent {
      code: ::crossterm::event::KeyCode::$key1($val1) | ::crossterm::event::KeyCode::$key2($val2),
      ..
    }
  };

  ($key:ident($val:tt), $($mods:ident)|+, $kind:ident) => {
    $crate::__keys_with_mods_kind! { $key($val), $($mods)|+, $kind }
  };
  ($key:ident, $($mods:ident)|+, $kind:ident) => {
    $crate::__keys_with_mods_kind! { $key, $($mods)|+, $kind }
  };

  ($key:ident($val:tt)) => {
    $crate::__keys_single! { $key($val) }
  };
  ($key:ident) => {
    $crate::__keys_single! { $key }
  };
}
