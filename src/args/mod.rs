use std::path::PathBuf;

use clap::Parser;
use tokio::time::Interval;

use crate::convert::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(about = "Convert media files with ffmpeg from a terminal UI", version)]
pub struct AppArgs {
  /// Number of FPS for the app to run at. 0 disables periodic redraws and only renders on event change
  #[arg(long, default_value = "0")]
  pub fps: u8,

  /// Media file to pre-select as input
  #[arg(short, long)]
  pub input: Option<PathBuf>,

  /// Directory to pre-select as output destination
  #[arg(short, long = "output-dir")]
  pub output_dir: Option<PathBuf>,

  /// Initial output format
  #[arg(short, long, default_value_t = OutputFormat::Mp3)]
  pub format: OutputFormat,

  /// Transcoding engine executable
  #[arg(long, env = "MEDIA_CONVERT_FFMPEG", default_value = "ffmpeg")]
  pub ffmpeg: PathBuf,

  /// Directory the pickers open in, defaults to the current directory
  #[arg(long)]
  pub start_dir: Option<PathBuf>,

  /// Where tracing output goes, defaults to media-convert.log in the temp directory
  #[arg(long)]
  pub log_file: Option<PathBuf>,
}

impl AppArgs {
  pub fn create_fps_interval(&self) -> Interval {
    if self.fps == 0 {
      tokio::time::interval(tokio::time::Duration::from_secs(60)) // 60 seconds interval if FPS is 0
    } else {
      tokio::time::interval(tokio::time::Duration::from_millis(1000 / self.fps.max(5) as u64))
    }
  }

  pub fn log_file(&self) -> PathBuf {
    self
      .log_file
      .clone()
      .unwrap_or_else(|| std::env::temp_dir().join("media-convert.log"))
  }
}
