use std::path::PathBuf;

use tokio::fs;

use super::*;

impl<E> App<E> {
  pub fn new(session: Session, engine: E, finished_tx: MpscTx<Notice>) -> Self {
    Self {
      state: State::Idle,
      popup: None,
      notices: VecDeque::new(),
      session,
      engine: Arc::new(engine),
      start_dir: None,
      tasks: JoinSet::new(),
      finished_tx,
      logs: Logs::default(),
    }
  }

  /// Where pickers open while nothing has been selected yet.
  pub fn start_dir(mut self, dir: impl Into<Option<PathBuf>>) -> Self {
    self.start_dir = dir.into();
    self
  }

  /// Pre-selects paths given on the command line. Paths that don't exist or
  /// have the wrong kind are reported in the activities panel and ignored.
  pub async fn seed(&mut self, input: Option<PathBuf>, output_dir: Option<PathBuf>) {
    if let Some(input) = input {
      match fs::metadata(&input).await {
        Ok(metadata) if metadata.is_file() => {
          let input = realpath(input).await;
          self.logs.info(format!("Input file: {}", input.display()));
          self.session.select_input_file(Some(input));
        }
        Ok(_) => self.reject_seed(format!("Ignoring --input {}: not a file", input.display())),
        Err(error) => self.reject_seed(format!("Ignoring --input {}: {error}", input.display())),
      }
    }

    if let Some(output_dir) = output_dir {
      match fs::metadata(&output_dir).await {
        Ok(metadata) if metadata.is_dir() => {
          let output_dir = realpath(output_dir).await;
          self.logs.info(format!("Output directory: {}", output_dir.display()));
          self.session.select_output_directory(Some(output_dir));
        }
        Ok(_) => self.reject_seed(format!("Ignoring --output-dir {}: not a directory", output_dir.display())),
        Err(error) => self.reject_seed(format!("Ignoring --output-dir {}: {error}", output_dir.display())),
      }
    }
  }

  fn reject_seed(&mut self, line: String) {
    warn!("{line}");
    self.logs.warn(line);
  }
}

async fn realpath(path: PathBuf) -> PathBuf {
  match fs::canonicalize(&path).await {
    Ok(canonicalized) => canonicalized,
    Err(_) => std::path::absolute(&path).unwrap_or(path),
  }
}

#[cfg(test)]
mod tests {
  use std::fs as std_fs;

  use tokio::sync::mpsc;

  use super::*;
  use crate::convert::Ffmpeg;

  #[tokio::test]
  async fn test_seed_accepts_existing_paths() {
    let tmp = tempfile::tempdir().unwrap();
    std_fs::write(tmp.path().join("clip.mkv"), b"").unwrap();

    let (finished_tx, _finished_rx) = mpsc::channel(1);
    let mut app = App::new(Session::default(), Ffmpeg::default(), finished_tx);
    app.seed(Some(tmp.path().join("clip.mkv")), Some(tmp.path().to_path_buf())).await;

    assert!(app.session().is_convert_enabled());
    assert_eq!(app.session().status(), "Selected: clip.mkv");
    assert!(app.popup().is_none());
  }

  #[tokio::test]
  async fn test_seed_ignores_wrong_kinds() {
    let tmp = tempfile::tempdir().unwrap();
    std_fs::write(tmp.path().join("clip.mkv"), b"").unwrap();

    let (finished_tx, _finished_rx) = mpsc::channel(1);
    let mut app = App::new(Session::default(), Ffmpeg::default(), finished_tx);
    app.seed(Some(tmp.path().to_path_buf()), Some(tmp.path().join("clip.mkv"))).await;

    assert!(app.session().input_file().is_none());
    assert!(app.session().output_directory().is_none());
    assert!(app.logs().iter().all(|log| matches!(log, Log::Warn { .. })));
    assert_eq!(app.logs().len(), 2);
  }
}
