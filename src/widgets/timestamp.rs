use chrono::{DateTime, Local};
use ratatui::prelude::{Color, Stylize};
use ratatui::text::Span;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Timestamp(DateTime<Local>);

impl Default for Timestamp {
  fn default() -> Self {
    Self(Local::now())
  }
}

impl Timestamp {
  pub fn now() -> Self {
    Self::default()
  }

  pub fn as_spans(&self) -> [Span<'static>; 3] {
    [
      Span::raw(ratatui::symbols::line::DOUBLE_VERTICAL_LEFT).fg(Color::DarkGray),
      Span::raw(self.0.format("%H:%M:%S").to_string()).fg(Color::White),
      Span::raw(ratatui::symbols::line::DOUBLE_VERTICAL_RIGHT).fg(Color::DarkGray),
    ]
  }
}
