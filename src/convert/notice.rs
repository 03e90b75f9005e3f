use strum::{Display, EnumIs};

use super::ConvertError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, EnumIs)]
pub enum NoticeLevel {
  Info,
  Warning,
  Critical,
}

/// A message that needs the user's acknowledgement before the app carries on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
  pub level: NoticeLevel,
  pub title: String,
  pub body: String,
}

impl Notice {
  pub fn new(level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      level,
      title: title.into(),
      body: body.into(),
    }
  }

  pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self::new(NoticeLevel::Info, title, body)
  }

  pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self::new(NoticeLevel::Warning, title, body)
  }

  pub fn critical(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self::new(NoticeLevel::Critical, title, body)
  }
}

impl From<ConvertError> for Notice {
  fn from(error: ConvertError) -> Self {
    match error {
      ConvertError::Validation(_) => Notice::warning("Error", error.to_string()),
      ConvertError::Engine(_) => Notice::critical("Error", error.to_string()),
    }
  }
}
