use crossterm::event::MouseEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Stylize};
use ratatui::widgets::{Block, BorderType, Clear, Widget};

/// A `w` x `h` rect centered in `area`, shrunk to fit when `area` is smaller.
pub fn fix_center(area: Rect, w: u16, h: u16) -> Rect {
  let [_, x, _] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(w.min(area.width)), Constraint::Fill(1)]).areas(area);
  Layout::vertical([Constraint::Fill(1), Constraint::Length(h.min(area.height)), Constraint::Fill(1)]).split(x)[1]
}

pub fn clear(area: Rect, buffer: &mut Buffer) {
  Clear.render(area, buffer);
}

#[inline(always)]
pub fn blk<'a>() -> Block<'a> {
  Block::bordered().border_type(BorderType::Rounded).fg(Color::Rgb(0, 255, 251))
}

pub fn mouse_position(mouse_event: &MouseEvent) -> Position {
  Position::new(mouse_event.column, mouse_event.row)
}
