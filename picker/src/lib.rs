//! Modal file/directory picker: a fuzzy filtered listing of one directory at a time.

mod entry;
mod filter;
mod state;
mod widget;

pub use entry::PickerEntry;
pub use filter::FilterInput;
pub use state::{PickerMode, PickerState};
pub use widget::Picker;

pub trait Fuzzier {
  /// Whether every char of `pattern` appears in order, ignoring case.
  fn fuzzy_contains(&self, pattern: &str) -> bool
  where
    Self: AsRef<str>,
  {
    let mut pattern_chars = pattern.chars().flat_map(char::to_lowercase);
    let mut current_char = pattern_chars.next();

    for chr in self.as_ref().chars().flat_map(char::to_lowercase) {
      if current_char.is_none() {
        break;
      }
      if Some(chr) == current_char {
        current_char = pattern_chars.next();
      }
    }
    current_char.is_none()
  }

  /// Higher is better. Runs of consecutive matches and a match on the first char weigh more.
  fn fuzzy_score(&self, pattern: &str) -> usize
  where
    Self: AsRef<str>,
  {
    let mut score = 0;
    let mut streak = 0;
    let mut pattern_chars = pattern.chars().flat_map(char::to_lowercase);
    let mut current_char = pattern_chars.next();

    for (i, chr) in self.as_ref().chars().flat_map(char::to_lowercase).enumerate() {
      let Some(wanted) = current_char else { break };
      if chr == wanted {
        streak += 1;
        score += streak + usize::from(i == 0) * 2;
        current_char = pattern_chars.next();
      } else {
        streak = 0;
      }
    }
    score
  }
}
impl<T> Fuzzier for T where T: AsRef<str> {}
