use std::sync::Arc;

use ratatui::prelude::{Color, Stylize};
use ratatui::text::{Line, Span};

use crate::convert::{Notice, NoticeLevel};
use crate::widgets::Timestamp;

#[derive(Debug, Clone)]
pub enum Log {
  Info { timestamp: Timestamp, line: Arc<str> },
  Warn { timestamp: Timestamp, line: Arc<str> },
  Error { timestamp: Timestamp, line: Arc<str> },
}

impl Log {
  pub fn info(line: impl Into<Arc<str>>) -> Self {
    Self::Info {
      timestamp: Timestamp::now(),
      line: line.into(),
    }
  }

  pub fn warn(line: impl Into<Arc<str>>) -> Self {
    Self::Warn {
      timestamp: Timestamp::now(),
      line: line.into(),
    }
  }

  pub fn error(line: impl Into<Arc<str>>) -> Self {
    Self::Error {
      timestamp: Timestamp::now(),
      line: line.into(),
    }
  }

  pub fn line(&self) -> &str {
    match *self {
      Log::Info { ref line, .. } | Log::Warn { ref line, .. } | Log::Error { ref line, .. } => line,
    }
  }

  fn timestamp(&self) -> &Timestamp {
    match *self {
      Log::Info { ref timestamp, .. } | Log::Warn { ref timestamp, .. } | Log::Error { ref timestamp, .. } => timestamp,
    }
  }

  fn color_content(&self) -> Color {
    match *self {
      Log::Info { .. } => Color::Rgb(0, 251, 255),
      Log::Warn { .. } => Color::Rgb(255, 123, 0),
      Log::Error { .. } => Color::Rgb(255, 70, 70),
    }
  }
}

/// One line per notice: multi-line bodies are joined so the panel stays row-per-entry.
impl From<&Notice> for Log {
  fn from(notice: &Notice) -> Self {
    let body = notice.body.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>().join(" ");
    let line = format!("{}: {body}", notice.title);

    match notice.level {
      NoticeLevel::Info => Log::info(line),
      NoticeLevel::Warning => Log::warn(line),
      NoticeLevel::Critical => Log::error(line),
    }
  }
}

impl<'a> From<&'a Log> for Line<'a> {
  fn from(log: &'a Log) -> Self {
    let mut spans = log.timestamp().as_spans().to_vec();
    spans.push(Span::raw(" "));
    spans.push(Span::from(log.line()).fg(log.color_content()));
    Line::from_iter(spans)
  }
}
