use ratatui::layout::Position;

use super::*;

/// Where a widget was last drawn, so mouse events can be routed to it.
#[derive(Debug, Default, Clone)]
pub struct KnownArea {
  inner: Cell<Option<Rect>>,
}

impl KnownArea {
  pub fn replace(&self, inner: impl Into<Option<Rect>>) {
    self.inner.replace(inner.into());
  }

  pub fn area(&self) -> Rect {
    self.inner.get().unwrap_or_default()
  }

  pub fn intersects(&self, other: Position) -> bool {
    self.inner.get().is_some_and(|area| area.contains(other))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_intersects_only_after_render() {
    let known = KnownArea::default();
    assert!(!known.intersects(Position::new(1, 1)));
    assert_eq!(known.area(), Rect::default());

    known.replace(Rect::new(0, 10, 20, 5));
    assert!(known.intersects(Position::new(3, 12)));
    assert!(!known.intersects(Position::new(3, 15)));
    assert!(!known.intersects(Position::new(20, 12)));
  }
}
