use crossterm::event::Event;
use helper::RenderEvent;
use picker::{Picker, PickerState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::Widget;

use crate::ui::{clear, fix_center};
use crate::widgets::{Alert, Confirmation};

/// Whatever currently owns the keyboard. Only one is shown at a time.
pub enum Popup {
  Picker(PickerState),
  Alert(Alert),
  Confirmation(Confirmation),
}

impl Popup {
  pub async fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    match *self {
      Popup::Picker(ref mut state) => state.handle_event(event).await,
      Popup::Alert(ref mut alert) => alert.handle_event(event),
      Popup::Confirmation(ref mut confirmation) => confirmation.handle_event(event),
    }
  }

  pub fn area(&self, area: Rect) -> Rect {
    match *self {
      Popup::Picker(_) => fix_center(area, area.width.saturating_sub(6).min(140), area.height.saturating_sub(2).min(36)),
      Popup::Alert(ref alert) => {
        let (width, height) = alert.size();
        fix_center(area, width, height)
      }
      Popup::Confirmation(_) => fix_center(area, 50, 9),
    }
  }
}

impl Widget for &Popup {
  fn render(self, area: Rect, buf: &mut Buffer)
  where
    Self: Sized,
  {
    let area = self.area(area);
    clear(area, buf);

    match self {
      Popup::Picker(state) => Picker::new(state).render(area, buf),
      Popup::Alert(widget) => widget.render(area, buf),
      Popup::Confirmation(widget) => widget.render(area, buf),
    }
  }
}
