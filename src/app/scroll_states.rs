/// Vertical scroll of a panel that follows its tail until the user scrolls away.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScrollState {
  pub auto_scroll: bool,
  pub vertical: u16,
}

impl ScrollState {
  /// Offset to draw with, given the furthest the content can scroll.
  pub fn offset(&self, max: u16) -> u16 {
    if self.auto_scroll { max } else { self.vertical.min(max) }
  }

  pub fn scroll_to_top(&mut self) {
    self.vertical = 0;
    self.lock();
  }

  pub fn scroll_to_bottom(&mut self, max: u16) {
    self.vertical = max;
    self.unlock();
  }

  pub fn unlock(&mut self) {
    self.auto_scroll = true;
  }

  pub fn lock(&mut self) {
    self.auto_scroll = false;
  }

  pub fn scroll_up_by(&mut self, len: u16, max: u16) {
    self.vertical = self.offset(max).saturating_sub(len);
    self.lock();
  }

  pub fn scroll_down_by(&mut self, len: u16, max: u16) {
    self.vertical = self.offset(max).saturating_add(len).min(max);
    self.auto_scroll = self.vertical == max;
  }
}

impl Default for ScrollState {
  fn default() -> Self {
    Self {
      auto_scroll: true,
      vertical: 0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_follows_tail_until_scrolled_up() {
    let mut state = ScrollState::default();
    assert_eq!(state.offset(7), 7);

    state.scroll_up_by(2, 7);
    assert!(!state.auto_scroll);
    assert_eq!(state.offset(10), 5);

    state.scroll_down_by(100, 10);
    assert!(state.auto_scroll);
    assert_eq!(state.offset(12), 12);
  }

  #[test]
  fn test_top_locks() {
    let mut state = ScrollState::default();
    state.scroll_to_top();
    assert_eq!(state.offset(30), 0);
    state.scroll_to_bottom(30);
    assert_eq!(state.offset(31), 31);
  }
}
