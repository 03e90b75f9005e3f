use std::ops::Deref;

/// Single line text input driving the picker's fuzzy filter.
///
/// `cursor` is a byte offset into `input` and always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
  cursor: usize,
  input: String,
}

impl Deref for FilterInput {
  type Target = str;
  fn deref(&self) -> &Self::Target {
    &self.input
  }
}

impl FilterInput {
  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn push(&mut self, chr: char) {
    self.input.insert(self.cursor, chr);
    self.cursor += chr.len_utf8();
  }

  pub fn push_str(&mut self, value: &str) {
    // Pasted text may carry a trailing newline from the terminal.
    let value = value.trim_end_matches(['\r', '\n']);
    self.input.insert_str(self.cursor, value);
    self.cursor += value.len();
  }

  pub fn left(&mut self) {
    if let Some(chr) = self.input[..self.cursor].chars().next_back() {
      self.cursor -= chr.len_utf8();
    }
  }

  pub fn right(&mut self) {
    if let Some(chr) = self.input[self.cursor..].chars().next() {
      self.cursor += chr.len_utf8();
    }
  }

  pub fn home(&mut self) {
    self.cursor = 0;
  }

  pub fn end(&mut self) {
    self.cursor = self.input.len();
  }

  pub fn backspace(&mut self) {
    if let Some(chr) = self.input[..self.cursor].chars().next_back() {
      self.cursor -= chr.len_utf8();
      self.input.remove(self.cursor);
    }
  }

  pub fn delete(&mut self) {
    if self.cursor < self.input.len() {
      self.input.remove(self.cursor);
    }
  }

  /// Removes the word left of the cursor along with any whitespace after it.
  pub fn delete_word(&mut self) {
    let head = &self.input[..self.cursor];
    let trimmed = head.trim_end();
    let start = trimmed
      .char_indices()
      .rev()
      .find(|(_, chr)| chr.is_whitespace() || matches!(chr, '.' | '_' | '-'))
      .map(|(pos, chr)| pos + chr.len_utf8())
      .unwrap_or(0);

    // A separator right before the cursor is removed on its own.
    let start = if start == trimmed.len() && start > 0 {
      trimmed[..start].char_indices().next_back().map(|(pos, _)| pos).unwrap_or(0)
    } else {
      start
    };

    self.input.drain(start..self.cursor);
    self.cursor = start;
  }

  pub fn clear(&mut self) {
    self.input.clear();
    self.cursor = 0;
  }

  pub fn as_str(&self) -> &str {
    &self.input
  }
}
