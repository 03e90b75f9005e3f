use crossterm::event::{Event, KeyEvent, MouseEventKind};
use helper::{RenderEvent, keys};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;
use ratatui::style::{Color, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::app::ScrollState;
use crate::areas::KnownArea;
use crate::convert::{Notice, NoticeLevel};
use crate::ui::{blk, clear, mouse_position};

/// Modal showing a [`Notice`] until the user acknowledges it.
/// Bodies taller than the screen scroll, starting from the top.
#[derive(Debug, Clone)]
pub struct Alert {
  notice: Notice,
  state: ScrollState,
  known_area: KnownArea,
}

impl From<Notice> for Alert {
  fn from(notice: Notice) -> Self {
    Self {
      notice,
      state: ScrollState {
        auto_scroll: false,
        vertical: 0,
      },
      known_area: KnownArea::default(),
    }
  }
}

impl Alert {
  pub fn notice(&self) -> &Notice {
    &self.notice
  }

  pub fn into_notice(self) -> Notice {
    self.notice
  }

  pub fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    match event {
      Event::Key(keys!(Char('y'), NONE, Press) | keys!(Enter, NONE, Press) | keys!(Esc, NONE, Press)) => Some(RenderEvent::handled()),
      Event::Key(key) => self.scroll_by_key(*key),
      Event::Mouse(mouse_event) if self.known_area.intersects(mouse_position(mouse_event)) => {
        let max_scroll = self.max_scroll();
        match mouse_event.kind {
          MouseEventKind::ScrollUp => self.state.scroll_up_by(3, max_scroll),
          MouseEventKind::ScrollDown => self.state.scroll_down_by(3, max_scroll),
          _ => return None,
        }
        Some(RenderEvent::render())
      }
      Event::Resize(..) => Some(RenderEvent::render()),
      _ => None,
    }
  }

  fn scroll_by_key(&mut self, key: KeyEvent) -> Option<RenderEvent> {
    let max_scroll = self.max_scroll();
    if max_scroll == 0 {
      return None;
    }
    let page = self.visible_height().saturating_sub(1).max(1);

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

  /// Preferred size: wide enough for the longest line, tall enough for every wrapped row plus borders.
  pub fn size(&self) -> (u16, u16) {
    let longest = self.notice.body.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = (longest.max(self.notice.title.chars().count()) + 6).clamp(40, 100);
    let height = self.rows(width - 2).len().saturating_add(2);
    (width as u16, u16::try_from(height).unwrap_or(u16::MAX))
  }

  /// The body hard-wrapped to `width` columns.
  fn rows(&self, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in self.notice.body.lines() {
      let chars: Vec<char> = line.chars().collect();
      if chars.is_empty() {
        rows.push(String::new());
      }
      rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
  }

  fn inner_width(&self) -> usize {
    self.known_area.area().width.saturating_sub(2) as usize
  }

  fn visible_height(&self) -> u16 {
    self.known_area.area().height.saturating_sub(2)
  }

  fn max_scroll(&self) -> u16 {
    let rows = u16::try_from(self.rows(self.inner_width()).len()).unwrap_or(u16::MAX);
    rows.saturating_sub(self.visible_height())
  }

  fn color(&self) -> Color {
    match self.notice.level {
      NoticeLevel::Info => Color::Rgb(0, 255, 251),
      NoticeLevel::Warning => Color::Rgb(255, 123, 0),
      NoticeLevel::Critical => Color::Rgb(255, 70, 70),
    }
  }

  fn line_controls(&self, scrollable: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(" "), Span::raw("[Y/ENTER]").blue(), Span::raw(" "), Span::raw("OK"), Span::raw(" ")];
    if scrollable {
      spans.extend([Span::raw("[↑/↓]").green(), Span::raw(" "), Span::raw("Scroll"), Span::raw(" ")]);
    }
    Line::from(spans).centered()
  }

  fn draw_counter(&self, offset: u16, rows: usize) -> Line<'static> {
    Line::from_iter([
      Span::raw(" "),
      Span::styled((offset + 1).to_string(), Color::Yellow),
      Span::raw("/"),
      Span::styled(rows.to_string(), Color::White),
      Span::raw(" "),
    ])
    .right_aligned()
  }
}

impl Widget for &Alert {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    self.known_area.replace(area);
    clear(area, buf);

    let rows = self.rows(self.inner_width());
    let max_scroll = u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_sub(self.visible_height());
    let offset = self.state.offset(max_scroll);

    let title = Line::from_iter([
      Span::raw(" "),
      Span::raw(self.notice.level.to_string()).bold(),
      Span::raw(": "),
      Span::raw(self.notice.title.as_str()),
      Span::raw(" "),
    ]);
    let mut block = blk().title_top(title).title_bottom(self.line_controls(max_scroll > 0)).fg(self.color());
    if max_scroll > 0 {
      block = block.title_top(self.draw_counter(offset, rows.len()));
    }

    let text: Text = rows.into_iter().map(Line::raw).collect();
    Paragraph::new(text.fg(Color::White)).block(block).scroll((offset, 0)).render(area, buf);
  }
}
