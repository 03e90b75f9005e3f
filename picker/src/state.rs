use std::path::{Path, PathBuf};

use crossterm::event::{Event, KeyEvent};
use helper::{RenderEvent, keys};
use ratatui::widgets::ListState;
use strum::{Display, EnumIs};

use super::*;
use crate::entry::scan;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumIs)]
pub enum PickerMode {
  File,
  Directory,
}

pub struct PickerState {
  mode: PickerMode,
  cwd: PathBuf,
  entries: Vec<PickerEntry>,
  error: Option<String>,

  pub(crate) filter: FilterInput,
  pub(crate) list_state: ListState,
}

impl PickerState {
  /// Opens a picker listing `entry`, or the current directory when none is given.
  pub async fn open(mode: PickerMode, entry: impl Into<Option<PathBuf>>) -> Self {
    let cwd = realpath(entry.into().unwrap_or_else(|| PathBuf::from("."))).await;
    let mut state = Self {
      mode,
      cwd: cwd.clone(),
      entries: Vec::new(),
      error: None,
      filter: FilterInput::default(),
      list_state: ListState::default(),
    };
    state.change_dir(cwd).await;
    state
  }

  pub fn mode(&self) -> PickerMode {
    self.mode
  }

  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn filter(&self) -> &str {
    &self.filter
  }

  /// Total number of entries in the listed directory, before filtering.
  pub fn total(&self) -> usize {
    self.entries.len()
  }

  /// Entries matching the filter, best match first while a filter is typed.
  pub fn visible(&self) -> Vec<PickerEntry> {
    let filter = self.filter.as_str();
    let mut items: Vec<PickerEntry> = self
      .entries
      .iter()
      .filter(|entry| filter.is_empty() || entry.filename().fuzzy_contains(filter))
      .cloned()
      .collect();

    if !filter.is_empty() {
      // stable sort keeps the directory-first order among equal scores
      items.sort_by_key(|entry| std::cmp::Reverse(entry.filename().fuzzy_score(filter)));
    }

    items
  }

  pub fn selected(&self) -> Option<PickerEntry> {
    self.visible().get(self.list_state.selected()?).cloned()
  }

  /// The chosen path, if the highlighted entry completes this picker.
  pub fn get(self) -> Option<PathBuf> {
    let selected = self.selected()?;
    selected.is_pickable(self.mode).then(|| selected.as_path().to_path_buf())
  }

  pub async fn handle_event(&mut self, event: &Event) -> Option<RenderEvent> {
    match event {
      Event::Key(key) => self.handle_key(*key).await,
      Event::Paste(content) => Some(self.handle_paste(content)),
      Event::Resize(..) => Some(RenderEvent::render()),
      _ => None,
    }
  }

  pub fn handle_paste(&mut self, content: &str) -> RenderEvent {
    self.filter.push_str(content);
    self.clamp_selection();
    RenderEvent::render()
  }

  pub async fn handle_key(&mut self, event: KeyEvent) -> Option<RenderEvent> {
    match event {
      keys!(Esc, NONE, Press) => return Some(RenderEvent::canceled()),
      keys!(Enter, NONE, Press) => return self.submit().await,

      keys!(Up, NONE, Press) => self.list_state.select_previous(),
      keys!(Down, NONE, Press) => self.list_state.select_next(),
      keys!(PageUp, NONE, Press) => self.list_state.scroll_up_by(10),
      keys!(PageDown, NONE, Press) => self.list_state.scroll_down_by(10),

      keys!(Left, ALT, Press) => return self.parent().await,
      keys!(Right, ALT, Press) | keys!(Tab, NONE, Press) => return self.descend().await,

      keys!(Left, NONE, Press) => self.filter.left(),
      keys!(Right, NONE, Press) => self.filter.right(),
      keys!(Home, NONE, Press) => self.filter.home(),
      keys!(End, NONE, Press) => self.filter.end(),
      keys!(Backspace, NONE, Press) if self.filter.is_empty() => return self.parent().await,
      keys!(Backspace, NONE, Press) => self.filter.backspace(),
      keys!(Delete, NONE, Press) => self.filter.delete(),
      keys!(Backspace, CONTROL, Press) | keys!(Char('w'), CONTROL, Press) => self.filter.delete_word(),
      keys!(Char('u'), CONTROL, Press) => self.filter.clear(),
      keys!(Char(chr), NONE | SHIFT, Press) => self.filter.push(chr),

      _ => return None,
    }

    self.clamp_selection();
    Some(RenderEvent::render())
  }

  async fn submit(&mut self) -> Option<RenderEvent> {
    let selected = self.selected()?;

    if selected.is_pickable(self.mode) {
      Some(RenderEvent::handled())
    } else if selected.is_dir() {
      self.change_dir(selected.as_path().to_path_buf()).await
    } else {
      Some(RenderEvent::no_ops())
    }
  }

  async fn descend(&mut self) -> Option<RenderEvent> {
    match self.selected() {
      Some(selected) if selected.is_dir() && !selected.is_current() => self.change_dir(selected.as_path().to_path_buf()).await,
      _ => None,
    }
  }

  async fn parent(&mut self) -> Option<RenderEvent> {
    let parent = self.cwd.parent()?.to_path_buf();
    self.change_dir(parent).await
  }

  async fn change_dir(&mut self, dir: PathBuf) -> Option<RenderEvent> {
    match scan(&dir, self.mode).await {
      Ok(entries) => {
        self.entries = entries;
        self.cwd = dir;
        self.error = None;
        self.filter.clear();
        self.list_state = ListState::default();
        self.clamp_selection();
      }
      Err(error) => self.error = Some(format!("{}: {error}", dir.display())),
    }

    Some(RenderEvent::render())
  }

  /// Keeps the highlighted row inside the filtered list.
  fn clamp_selection(&mut self) {
    let len = self.visible().len();
    if len == 0 {
      self.list_state.select(None);
    } else {
      let selected = self.list_state.selected().unwrap_or(0).min(len - 1);
      self.list_state.select(Some(selected));
    }
  }
}

async fn realpath(path: PathBuf) -> PathBuf {
  match tokio::fs::canonicalize(&path).await {
    Ok(canonicalized) => canonicalized,
    Err(_) => std::path::absolute(&path).unwrap_or(path),
  }
}
