use ratatui::prelude::*;

mod alert;
pub use alert::*;

mod confirmation;
pub use confirmation::*;

mod log;
pub use log::*;

mod logs;
pub use logs::*;

mod timestamp;
pub use timestamp::*;

/// `[c]onvert` style label: the first char is the hotkey.
pub fn line_with_hotkey<C: Into<Option<Color>>>(value: &str, spaced: bool, hkc: C, line_color: C) -> Line<'_> {
  let hkc = hkc.into().unwrap_or(Color::White);
  let line_color = line_color.into().unwrap_or(Color::White);

  let Some(first) = value.chars().next() else {
    return Line::raw(value);
  };
  let (initial, rest) = value.split_at(first.len_utf8());

  let spaced_opening = if spaced { Span::styled(" [", hkc) } else { Span::styled("[", hkc) };
  let spaced_closing = if spaced { Span::styled(" ", hkc) } else { Span::raw("") };

  Line::from_iter([
    spaced_opening,
    Span::styled(initial, hkc).italic(),
    Span::styled("]", hkc),
    Span::styled(rest, line_color),
    spaced_closing,
  ])
}
