use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use super::EngineError;

/// The external program doing the actual conversion.
pub trait Transcoder {
  /// Converts `input` into `output`, replacing `output` when it already exists.
  /// The target format is implied by the extension of `output`.
  fn transcode(&self, input: &Path, output: &Path) -> impl Future<Output = Result<(), EngineError>> + Send;
}

#[derive(Debug, Clone)]
pub struct Ffmpeg {
  program: PathBuf,
}

impl Default for Ffmpeg {
  fn default() -> Self {
    Self::new("ffmpeg")
  }
}

impl Ffmpeg {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self { program: program.into() }
  }

  pub fn args(input: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-nostdin", "-loglevel", "warning", "-y", "-i"]
      .into_iter()
      .map(OsString::from)
      .collect();
    args.push(input.into());
    args.push(output.into());
    args
  }

  pub async fn is_installed(&self) -> bool {
    Command::new(&self.program)
      .arg("-version")
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::null())
      .kill_on_drop(true)
      .status()
      .await
      .is_ok_and(|status| status.success())
  }
}

impl Transcoder for Ffmpeg {
  async fn transcode(&self, input: &Path, output: &Path) -> Result<(), EngineError> {
    let args = Self::args(input, output);
    debug!(program = %self.program.display(), ?args, "spawning engine");

    let finished = Command::new(&self.program)
      .args(&args)
      .stdin(Stdio::null())
      .stdout(Stdio::null())
      .stderr(Stdio::piped())
      .kill_on_drop(true)
      .output()
      .await
      .map_err(|source| EngineError::Spawn {
        program: self.program.display().to_string(),
        source,
      })?;

    if finished.status.success() {
      Ok(())
    } else {
      Err(EngineError::Failed {
        status: finished.status.code(),
        stderr: String::from_utf8_lossy(&finished.stderr).into_owned(),
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_args_overwrite_and_order() {
    let args = Ffmpeg::args(Path::new("/in/clip.mkv"), Path::new("/out/clip.mp3"));
    let y = args.iter().position(|arg| arg == "-y").unwrap();
    let i = args.iter().position(|arg| arg == "-i").unwrap();

    assert!(y < i);
    assert_eq!(args[i + 1], "/in/clip.mkv");
    assert_eq!(args.last().unwrap(), "/out/clip.mp3");
  }

  #[tokio::test]
  async fn test_missing_program_is_a_spawn_error() {
    let tmp = tempfile::tempdir().unwrap();
    let engine = Ffmpeg::new(tmp.path().join("no-such-ffmpeg"));

    assert!(!engine.is_installed().await);
    let error = engine
      .transcode(Path::new("clip.mkv"), &tmp.path().join("clip.mp3"))
      .await
      .unwrap_err();
    assert!(matches!(error, EngineError::Spawn { .. }));
    assert!(error.diagnostic().contains("no-such-ffmpeg"));
  }

  /// Stand-in engine mirroring ffmpeg's behaviour around missing inputs and existing outputs.
  #[cfg(unix)]
  const STUB_ENGINE: &str = r#"#!/bin/sh
if [ "$1" = "-version" ]; then echo "stub version"; exit 0; fi
overwrite=no
input=""
prev=""
for arg in "$@"; do
  [ "$arg" = "-y" ] && overwrite=yes
  [ "$prev" = "-i" ] && input="$arg"
  prev="$arg"
done
output="$prev"
if [ ! -f "$input" ]; then
  echo "$input: No such file or directory" >&2
  exit 1
fi
if [ -e "$output" ] && [ "$overwrite" = no ]; then
  echo "File '$output' already exists. Exiting." >&2
  exit 1
fi
cp "$input" "$output"
"#;

  #[cfg(unix)]
  #[tokio::test]
  async fn test_stub_engine_round_trips() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use crate::convert::{NoticeLevel, OutputFormat, Session};

    let tmp = tempfile::tempdir().unwrap();
    let script = tmp.path().join("ffmpeg");
    fs::write(&script, STUB_ENGINE).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    let engine = Ffmpeg::new(&script);
    assert!(engine.is_installed().await);

    let input = tmp.path().join("clip.mkv");
    let out_dir = tmp.path().join("out");
    fs::create_dir(&out_dir).unwrap();
    fs::write(&input, b"first").unwrap();

    let mut session = Session::new(OutputFormat::Mp3);
    session.select_input_file(Some(input.clone()));
    session.select_output_directory(Some(out_dir.clone()));

    let expected = out_dir.join("clip.mp3");
    let notice = session.convert(&engine).await;
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.body.contains(&expected.display().to_string()));
    assert_eq!(fs::read(&expected).unwrap(), b"first");

    // same inputs again: the existing output is replaced rather than refused
    fs::write(&input, b"second").unwrap();
    let notice = session.convert(&engine).await;
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(fs::read(&expected).unwrap(), b"second");

    fs::remove_file(&input).unwrap();
    let notice = session.convert(&engine).await;
    assert_eq!(notice.level, NoticeLevel::Critical);
    assert!(notice.body.starts_with("Conversion failed:\n"));
    assert!(notice.body.contains("No such file or directory"));
  }
}
