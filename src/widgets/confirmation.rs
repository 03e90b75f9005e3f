use crossterm::event::Event;
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect, Spacing};
use ratatui::prelude::Stylize;
use ratatui::style::Color;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::ui::{blk, clear};

/// Yes/No modal. `handled` means confirmed, `canceled` means declined.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Confirmation {
  prompt: String,
  value: bool,
}

impl Confirmation {
  pub fn new(prompt: impl Into<String>, value: bool) -> Self {
    Self {
      prompt: prompt.into(),
      value,
    }
  }

  pub fn value(&self) -> bool {
    self.value
  }

  pub fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    match event {
      Event::Key(keys!(Char('y'), NONE | SHIFT, Press) | keys!(Char('Y'), NONE | SHIFT, Press)) => Some(RenderEvent::handled()),
      Event::Key(keys!(Char('n'), NONE | SHIFT, Press) | keys!(Char('N'), NONE | SHIFT, Press) | keys!(Esc, NONE, Press)) => {
        Some(RenderEvent::canceled())
      }
      Event::Key(keys!(Enter, NONE, Press)) if self.value => Some(RenderEvent::handled()),
      Event::Key(keys!(Enter, NONE, Press)) => Some(RenderEvent::canceled()),
      Event::Key(keys!(Left, NONE, Press) | keys!(Right, NONE, Press) | keys!(Tab, NONE, Press)) => {
        self.value = !self.value;
        Some(RenderEvent::render())
      }
      Event::Resize(..) => Some(RenderEvent::render()),
      _ => None,
    }
  }

  pub fn area(&self, area: Rect) -> [Rect; 3] {
    let [prompt, footer] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(area);
    let [confirm, cancel] = Layout::horizontal([Constraint::Fill(1); 2])
      .spacing(Spacing::Space(4))
      .horizontal_margin(4)
      .areas(footer);

    [prompt, confirm, cancel]
  }

  fn draw_button(&self, label: &'static str, selected: bool, area: Rect, buf: &mut Buffer) {
    let bg = if selected { Color::Rgb(50, 80, 70) } else { Color::Reset };
    let line = Line::raw(label).centered().fg(Color::White).bg(bg);
    Paragraph::new(line).block(blk()).render(area, buf)
  }
}

impl Widget for &Confirmation {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    clear(area, buf);

    let title = Line::from_iter([Span::raw(" "), Span::raw("Confirm").bold(), Span::raw(" ")]).centered();
    let block = blk().title_top(title).fg(Color::Rgb(255, 123, 0));
    let inner = block.inner(area);
    block.render(area, buf);

    let [prompt, confirm, cancel] = self.area(inner);
    Paragraph::new(self.prompt.as_str())
      .fg(Color::White)
      .wrap(Wrap { trim: true })
      .centered()
      .render(prompt, buf);
    self.draw_button("[Y]es", self.value, confirm, buf);
    self.draw_button("[N]o", !self.value, cancel, buf);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

  use super::*;

  fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  #[test]
  fn test_enter_follows_highlighted_button() {
    let mut confirmation = Confirmation::new("Quit?", false);
    assert!(confirmation.handle_event(&key(KeyCode::Enter)).unwrap().kind.is_canceled());

    confirmation.handle_event(&key(KeyCode::Left));
    assert!(confirmation.value());
    assert!(confirmation.handle_event(&key(KeyCode::Enter)).unwrap().kind.is_handled());
  }

  #[test]
  fn test_shortcuts() {
    let mut confirmation = Confirmation::new("Quit?", false);
    assert!(confirmation.handle_event(&key(KeyCode::Char('y'))).unwrap().kind.is_handled());
    assert!(confirmation.handle_event(&key(KeyCode::Esc)).unwrap().kind.is_canceled());
    assert!(confirmation.handle_event(&key(KeyCode::Char('q'))).is_none());
  }
}
