use std::collections::VecDeque;
use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Stylize, Text, Widget};
use ratatui::style::Color;
use ratatui::symbols::block::ONE_EIGHTH as I;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::ScrollState;
use crate::areas::KnownArea;
use crate::ui::{blk, clear, mouse_position};
use crate::widgets::Log;

const CAPACITY: usize = 5000;

/// The activities panel: a bounded, scrollable history of what happened this run.
#[derive(Debug, Default)]
pub struct Logs {
  items: VecDeque<Log>,
  state: ScrollState,
  known_area: KnownArea,
}

impl Logs {
  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Log> {
    self.items.iter()
  }

  pub fn add(&mut self, log: Log) {
    self.items.push_back(log);
    if self.items.len() > CAPACITY {
      self.items.pop_front();
    }
  }

  pub fn info(&mut self, line: impl Into<Arc<str>>) {
    self.add(Log::info(line));
  }

  pub fn warn(&mut self, line: impl Into<Arc<str>>) {
    self.add(Log::warn(line));
  }

  fn visible_height(&self) -> u16 {
    self.known_area.area().height.saturating_sub(2)
  }

  fn max_scroll(&self) -> u16 {
    let items_count = u16::try_from(self.items.len()).unwrap_or(u16::MAX);
    items_count.saturating_sub(self.visible_height())
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> Option<RenderEvent> {
    let max_scroll = self.max_scroll();
    if max_scroll == 0 {
      return None;
    }
    let page = (self.visible_height() / 2).max(1);

    match key {
      keys!(Up, NONE, Press) => self.state.scroll_up_by(1, max_scroll),
      keys!(Down, NONE, Press) => self.state.scroll_down_by(1, max_scroll),
      keys!(PageUp, NONE, Press) => self.state.scroll_up_by(page, max_scroll),
      keys!(PageDown, NONE, Press) => self.state.scroll_down_by(page, max_scroll),
      keys!(Home, NONE, Press) => self.state.scroll_to_top(),
      keys!(End, NONE, Press) => self.state.scroll_to_bottom(max_scroll),
      _ => return None,
    }

    Some(RenderEvent::render())
  }

  pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Option<RenderEvent> {
    if !self.known_area.intersects(mouse_position(&mouse_event)) {
      return None;
    }

    let max_scroll = self.max_scroll();
    match mouse_event.kind {
      MouseEventKind::ScrollUp => self.state.scroll_up_by(3, max_scroll),
      MouseEventKind::ScrollDown => self.state.scroll_down_by(3, max_scroll),
      _ => return None,
    }

    Some(RenderEvent::render())
  }

  fn hotkey_labels(&self) -> Line<'static> {
    Line::from_iter([
      Span::raw(" "),
      Span::raw("[↑/↓]").fg(Color::Green),
      Span::raw(" Navigate"),
      Span::raw(" "),
      Span::raw(I),
      Span::raw(" "),
      Span::raw("[PgUp/PgDn]").fg(Color::Blue),
      Span::raw(" Fast Scroll"),
      Span::raw(" "),
      Span::raw(I),
      Span::raw(" "),
      Span::raw("[Home/End]").fg(Color::Yellow),
      Span::raw(" Jump"),
      Span::raw(" "),
    ])
  }

  fn draw_logs_counter(&self, offset: u16) -> Line<'static> {
    let auto_indicator = if self.state.auto_scroll { "🔄" } else { "🔒" };
    let current_line = if self.is_empty() { 0 } else { offset + 1 };

    Line::from_iter([
      Span::raw(ratatui::symbols::line::VERTICAL_LEFT),
      Span::raw(format!(" {auto_indicator} ")),
      Span::styled(current_line.to_string(), Color::Yellow),
      Span::raw("/"),
      Span::styled(self.items.len().to_string(), Color::White),
      Span::raw(" "),
      Span::raw(ratatui::symbols::line::VERTICAL_RIGHT),
    ])
  }
}

impl Widget for &Logs {
  fn render(self, area: Rect, buf: &mut Buffer) {
    self.known_area.replace(area);
    let offset = self.state.offset(self.max_scroll());

    let block = blk()
      .title_top(Line::raw(" 📈 Activities ").left_aligned())
      .title_bottom(self.draw_logs_counter(offset).right_aligned())
      .title_bottom(self.hotkey_labels().centered());

    let lines: Text = self.items.iter().map(Line::from).collect();

    clear(area, buf);
    Paragraph::new(lines).block(block).scroll((offset, 0)).render(area, buf);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyModifiers};

  use super::*;

  fn rendered(logs: &Logs, area: Rect) -> Buffer {
    let mut buf = Buffer::empty(area);
    logs.render(area, &mut buf);
    buf
  }

  #[test]
  fn test_capacity_drops_oldest() {
    let mut logs = Logs::default();
    for i in 0..CAPACITY + 3 {
      logs.info(format!("line {i}"));
    }
    assert_eq!(logs.len(), CAPACITY);
    assert_eq!(logs.iter().next().map(Log::line), Some("line 3"));
  }

  #[test]
  fn test_scroll_keys_only_when_overflowing() {
    let mut logs = Logs::default();
    logs.info("only line");
    rendered(&logs, Rect::new(0, 0, 60, 6));
    assert!(logs.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)).is_none());

    for i in 0..20 {
      logs.info(format!("line {i}"));
    }
    assert!(logs.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)).is_some());
    assert!(!logs.state.auto_scroll);
    logs.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    assert!(logs.state.auto_scroll);
  }

  #[test]
  fn test_renders_tail_by_default() {
    let mut logs = Logs::default();
    for i in 0..10 {
      logs.info(format!("entry-{i}"));
    }
    let buf = rendered(&logs, Rect::new(0, 0, 80, 5));
    let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("entry-9"));
    assert!(!text.contains("entry-0"));
  }
}
