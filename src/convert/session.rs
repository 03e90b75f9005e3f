use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::*;

pub const IDLE_STATUS: &str = "Select a media file to convert:";

/// What the user picked so far. Owned by the app, one per window.
#[derive(Debug, Clone)]
pub struct Session {
  input_file: Option<PathBuf>,
  output_directory: Option<PathBuf>,
  format: Option<OutputFormat>,
  status: String,
  convert_enabled: bool,
}

impl Default for Session {
  fn default() -> Self {
    Self::new(OutputFormat::default())
  }
}

impl Session {
  pub fn new(format: impl Into<Option<OutputFormat>>) -> Self {
    Self {
      input_file: None,
      output_directory: None,
      format: format.into(),
      status: String::from(IDLE_STATUS),
      convert_enabled: false,
    }
  }

  pub fn input_file(&self) -> Option<&Path> {
    self.input_file.as_deref()
  }

  pub fn output_directory(&self) -> Option<&Path> {
    self.output_directory.as_deref()
  }

  pub fn format(&self) -> Option<OutputFormat> {
    self.format
  }

  pub fn status(&self) -> &str {
    &self.status
  }

  pub fn is_convert_enabled(&self) -> bool {
    self.convert_enabled
  }

  /// Outcome of the file picker. `None` or an empty path means the picker was cancelled.
  /// Returns whether the selection changed.
  pub fn select_input_file(&mut self, picked: Option<PathBuf>) -> bool {
    let Some(path) = non_empty(picked) else {
      return false;
    };

    let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy().into_owned();
    info!(input = %path.display(), "input file selected");
    self.status = format!("Selected: {name}");
    self.input_file = Some(path);
    self.check_ready();
    true
  }

  /// Outcome of the directory picker. Cancelling leaves everything as it was.
  pub fn select_output_directory(&mut self, picked: Option<PathBuf>) -> Option<Notice> {
    let path = non_empty(picked)?;

    info!(output_directory = %path.display(), "output directory selected");
    let notice = Notice::info("Output Directory Selected", format!("Files will be saved to:\n{}", path.display()));
    self.output_directory = Some(path);
    self.check_ready();
    Some(notice)
  }

  pub fn check_ready(&mut self) {
    self.convert_enabled = self.input_file.is_some() && self.output_directory.is_some();
  }

  pub fn set_format(&mut self, format: OutputFormat) {
    self.format = Some(format);
  }

  pub fn next_format(&mut self) -> OutputFormat {
    let format = self.format.map(OutputFormat::next).unwrap_or_default();
    self.format = Some(format);
    format
  }

  pub fn previous_format(&mut self) -> OutputFormat {
    let format = self.format.map(OutputFormat::previous).unwrap_or_default();
    self.format = Some(format);
    format
  }

  /// Runs the pre-flight checks and derives the output path.
  pub fn prepare(&self) -> Result<Conversion, ValidationError> {
    let input = self.input_file.as_ref().ok_or(ValidationError::MissingInput)?;
    let dir = self.output_directory.as_ref().ok_or(ValidationError::MissingOutputDirectory)?;
    let format = self.format.ok_or(ValidationError::MissingFormat)?;

    Ok(Conversion {
      input: input.clone(),
      output: output_path(dir, input, format),
    })
  }

  /// Validates, then runs the engine to completion. Every outcome becomes a notice.
  pub async fn convert<T: Transcoder>(&self, engine: &T) -> Notice {
    match self.prepare() {
      Ok(conversion) => conversion.run(engine).await,
      Err(error) => {
        warn!(%error, "conversion refused");
        Notice::from(ConvertError::from(error))
      }
    }
  }
}

/// One engine invocation, detached from the session so it can run off the UI loop.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Conversion {
  pub input: PathBuf,
  pub output: PathBuf,
}

impl Conversion {
  pub async fn execute<T: Transcoder>(&self, engine: &T) -> Result<(), ConvertError> {
    info!(input = %self.input.display(), output = %self.output.display(), "conversion started");
    engine.transcode(&self.input, &self.output).await?;
    Ok(())
  }

  pub async fn run<T: Transcoder>(&self, engine: &T) -> Notice {
    match self.execute(engine).await {
      Ok(()) => {
        info!(output = %self.output.display(), "conversion finished");
        Notice::info("Success", format!("File converted successfully!\nSaved as: {}", self.output.display()))
      }
      Err(error) => {
        warn!(%error, "conversion failed");
        Notice::from(error)
      }
    }
  }
}

fn non_empty(picked: Option<PathBuf>) -> Option<PathBuf> {
  picked.filter(|path| !path.as_os_str().is_empty())
}
