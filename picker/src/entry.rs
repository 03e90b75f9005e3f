use std::borrow::Cow;
use std::cmp::Ordering;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use devicons::FileIcon;
use human_repr::HumanCount;
use ratatui::prelude::{Color, Line, Span};
use ratatui::style::Stylize;

use crate::state::PickerMode;

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum PickerEntry {
  /// The listed directory itself, offered first when picking a directory.
  Current { path: Arc<Path> },
  Dir { path: Arc<Path> },
  File { path: Arc<Path>, size: u64 },
}

impl PickerEntry {
  pub fn filename(&self) -> Cow<'_, str> {
    match *self {
      PickerEntry::Current { .. } => Cow::Borrowed("."),
      PickerEntry::Dir { ref path } | PickerEntry::File { ref path, .. } => match path.file_name() {
        Some(filename) => filename.to_string_lossy(),
        None => path.to_string_lossy(),
      },
    }
  }

  pub fn as_path(&self) -> &Path {
    match *self {
      PickerEntry::Current { ref path } | PickerEntry::Dir { ref path } | PickerEntry::File { ref path, .. } => path,
    }
  }

  pub fn is_dir(&self) -> bool {
    matches!(self, Self::Dir { .. } | Self::Current { .. })
  }

  pub fn is_file(&self) -> bool {
    matches!(self, Self::File { .. })
  }

  pub fn is_current(&self) -> bool {
    matches!(self, Self::Current { .. })
  }

  /// Whether choosing this entry completes a picker running in `mode`.
  pub fn is_pickable(&self, mode: PickerMode) -> bool {
    match mode {
      PickerMode::File => self.is_file(),
      PickerMode::Directory => self.is_dir(),
    }
  }

  pub fn icon(&self) -> Span<'static> {
    if self.is_dir() {
      return Span::raw("\u{f07b}").fg(Color::Rgb(224, 177, 77));
    }

    let fileicon = FileIcon::from(self.as_path());
    let color = Color::from_str(fileicon.color).unwrap_or(Color::Reset);
    Span::raw(fileicon.icon.to_string()).fg(color)
  }

  /// Entry name with the chars present in `filter` highlighted.
  pub fn apply_colors(&self, filter: &str) -> Line<'static> {
    let mut spans: Vec<Span> = vec![self.icon(), Span::raw(" ")];
    let name = self.filename();
    let name_color = if self.is_dir() { Color::LightBlue } else { Color::White };

    if filter.is_empty() {
      spans.push(Span::raw(name.into_owned()).fg(name_color));
    } else {
      let filter: Vec<char> = filter.chars().flat_map(char::to_lowercase).collect();
      for chr in name.chars() {
        let span = Span::raw(chr.to_string());
        if chr.to_lowercase().any(|lower| filter.contains(&lower)) {
          spans.push(span.fg(Color::Rgb(36, 132, 96)).bold());
        } else {
          spans.push(span.fg(name_color));
        }
      }
    }

    if self.is_current() {
      spans.push(Span::raw("  (this directory)").dark_gray());
    } else if self.is_dir() {
      spans.push(Span::raw("/").fg(name_color));
    }

    Line::from(spans)
  }

  pub fn details(&self) -> Vec<Line<'static>> {
    let location = self
      .as_path()
      .parent()
      .map(|parent| parent.display().to_string())
      .unwrap_or_default();

    match *self {
      PickerEntry::Current { ref path } => vec![
        Line::raw("Directory currently listed").cyan(),
        Line::raw(path.display().to_string()),
      ],
      PickerEntry::Dir { ref path } => vec![
        Line::raw("Directory").cyan(),
        Line::raw(path.display().to_string()),
      ],
      PickerEntry::File { size, .. } => vec![
        Line::from_iter([Span::raw("Name: ").dark_gray(), Span::raw(self.filename().into_owned())]),
        Line::from_iter([Span::raw("Size: ").dark_gray(), Span::raw(size.human_count_bytes().to_string())]),
        Line::from_iter([Span::raw("In:   ").dark_gray(), Span::raw(location)]),
      ],
    }
  }
}

impl PartialEq for PickerEntry {
  fn eq(&self, other: &Self) -> bool {
    self.is_current() == other.is_current() && self.as_path() == other.as_path()
  }
}

impl Eq for PickerEntry {}

impl PartialOrd for PickerEntry {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// The current directory first, then directories, then files; by case folded name within a group.
impl Ord for PickerEntry {
  fn cmp(&self, other: &Self) -> Ordering {
    fn rank(entry: &PickerEntry) -> u8 {
      match entry {
        PickerEntry::Current { .. } => 0,
        PickerEntry::Dir { .. } => 1,
        PickerEntry::File { .. } => 2,
      }
    }

    rank(self)
      .cmp(&rank(other))
      .then_with(|| self.filename().to_lowercase().cmp(&other.filename().to_lowercase()))
      .then_with(|| self.as_path().cmp(other.as_path()))
  }
}

/// Lists `dir` for a picker running in `mode`. Entries whose metadata can't be read
/// (dangling links, permission errors) are left out.
pub(crate) async fn scan(dir: &Path, mode: PickerMode) -> io::Result<Vec<PickerEntry>> {
  let mut readdir = tokio::fs::read_dir(dir).await?;
  let mut entries = Vec::new();

  if mode.is_directory() {
    entries.push(PickerEntry::Current { path: Arc::from(dir) });
  }

  while let Some(entry) = readdir.next_entry().await? {
    let path = entry.path();
    let Ok(metadata) = tokio::fs::metadata(&path).await else {
      continue;
    };

    if metadata.is_dir() {
      entries.push(PickerEntry::Dir { path: Arc::from(path) });
    } else if mode.is_file() && metadata.is_file() {
      entries.push(PickerEntry::File {
        path: Arc::from(path),
        size: metadata.len(),
      });
    }
  }

  entries.sort();
  Ok(entries)
}
