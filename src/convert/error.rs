use std::io;

use thiserror::Error;

/// Pre-flight checks run before the engine is invoked, in this order.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ValidationError {
  #[error("No input file selected.")]
  MissingInput,
  #[error("No output directory selected.")]
  MissingOutputDirectory,
  #[error("Please select an output format.")]
  MissingFormat,
}

#[derive(Debug, Error)]
pub enum EngineError {
  /// The engine binary could not be started at all.
  #[error("could not run {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  /// The engine ran and exited unsuccessfully; `stderr` is its diagnostic output.
  #[error("{}", diagnostic_or_status(.stderr, .status))]
  Failed { status: Option<i32>, stderr: String },
}

impl EngineError {
  /// Text shown to the user for this failure, the engine's stderr verbatim when there is any.
  pub fn diagnostic(&self) -> String {
    self.to_string()
  }
}

fn diagnostic_or_status(stderr: &str, status: &Option<i32>) -> String {
  match (stderr.trim().is_empty(), *status) {
    (false, _) => stderr.to_string(),
    (true, Some(code)) => format!("engine exited with status {code}"),
    (true, None) => String::from("engine was terminated by a signal"),
  }
}

#[derive(Debug, Error)]
pub enum ConvertError {
  #[error(transparent)]
  Validation(#[from] ValidationError),
  #[error("Conversion failed:\n{0}")]
  Engine(#[from] EngineError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_failed_shows_stderr_verbatim() {
    let error = EngineError::Failed {
      status: Some(1),
      stderr: String::from("clip.mkv: Invalid data found when processing input\n"),
    };
    assert_eq!(error.diagnostic(), "clip.mkv: Invalid data found when processing input\n");
  }

  #[test]
  fn test_failed_without_stderr_falls_back_to_status() {
    let error = EngineError::Failed {
      status: Some(69),
      stderr: String::from("  \n"),
    };
    assert_eq!(error.diagnostic(), "engine exited with status 69");

    let error = EngineError::Failed { status: None, stderr: String::new() };
    assert_eq!(error.diagnostic(), "engine was terminated by a signal");
  }

  #[test]
  fn test_convert_error_wraps_engine_text() {
    let error = ConvertError::from(EngineError::Spawn {
      program: String::from("ffmpeg"),
      source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    });
    assert_eq!(error.to_string(), "Conversion failed:\ncould not run ffmpeg: No such file or directory");
  }
}
