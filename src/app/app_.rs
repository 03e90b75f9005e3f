use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::event::{Event, KeyEvent};
use helper::{RenderEvent, RenderKind, keys};
use picker::{PickerMode, PickerState};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use super::*;
use crate::convert::{ConvertError, Ffmpeg, Notice, NoticeLevel, Session, Transcoder};
use crate::widgets::{Alert, Confirmation, Log, Logs};

mod impls;
mod render;

pub struct App<E = Ffmpeg> {
  state: State,
  popup: Option<Popup>,
  notices: VecDeque<Notice>,

  session: Session,
  engine: Arc<E>,
  start_dir: Option<PathBuf>,

  // bg task
  tasks: JoinSet<()>,
  finished_tx: MpscTx<Notice>,
  logs: Logs,
}

impl<E> App<E> {
  pub fn state(&self) -> State {
    self.state
  }

  pub fn is_exiting(&self) -> bool {
    self.state.is_exit()
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  pub fn popup(&self) -> Option<&Popup> {
    self.popup.as_ref()
  }

  pub fn logs(&self) -> &Logs {
    &self.logs
  }

  /// Shows `notice` as a modal, or queues it behind the one already open.
  pub fn notify(&mut self, notice: Notice) {
    match notice.level {
      NoticeLevel::Info => info!(title = %notice.title, body = %notice.body, "notice"),
      NoticeLevel::Warning => warn!(title = %notice.title, body = %notice.body, "notice"),
      NoticeLevel::Critical => error!(title = %notice.title, body = %notice.body, "notice"),
    }
    self.logs.add(Log::from(&notice));

    if self.popup.is_none() {
      self.popup = Some(Popup::Alert(Alert::from(notice)));
    } else {
      self.notices.push_back(notice);
    }
  }

  /// Called with the outcome of the background conversion.
  pub fn finish(&mut self, notice: Notice) -> RenderEvent {
    while let Some(joined) = self.tasks.try_join_next() {
      if let Err(error) = joined {
        error!(%error, "conversion task did not complete");
      }
    }

    if self.state.is_converting() {
      self.state = State::Idle;
    }
    self.notify(notice);
    RenderEvent::render()
  }

  fn exit(&mut self) -> RenderEvent {
    if self.state.is_converting() {
      warn!("exiting while a conversion is running, the engine will be stopped");
    }
    self.tasks.abort_all();
    self.state = State::Exit;
    RenderEvent::exit()
  }

  fn request_exit(&mut self) -> RenderEvent {
    if !self.state.is_converting() {
      return self.exit();
    }

    match self.popup.take() {
      Some(Popup::Alert(alert)) => self.notices.push_front(alert.into_notice()),
      Some(other) => {
        self.popup = Some(other);
        return RenderEvent::no_ops();
      }
      None => {}
    }

    let prompt = "A conversion is still running. Quit and stop it?";
    self.popup = Some(Popup::Confirmation(Confirmation::new(prompt, false)));
    RenderEvent::render()
  }

  fn picked(&mut self, state: PickerState) {
    let mode = state.mode();
    let picked = state.get();

    match mode {
      PickerMode::File => {
        if self.session.select_input_file(picked)
          && let Some(input) = self.session.input_file()
        {
          self.logs.info(format!("Input file: {}", input.display()));
        }
      }
      PickerMode::Directory => {
        if let Some(notice) = self.session.select_output_directory(picked) {
          self.notify(notice);
        }
      }
    }
  }

  fn change_format(&mut self, forward: bool) -> RenderEvent {
    let format = if forward { self.session.next_format() } else { self.session.previous_format() };
    debug!(%format, "output format changed");
    RenderEvent::render()
  }

  async fn handle_popup(&mut self, event: &Event) -> RenderEvent {
    let Some(popup) = self.popup.as_mut() else {
      return RenderEvent::no_ops();
    };
    let Some(handled) = popup.handle_event(event).await else {
      return RenderEvent::no_ops();
    };

    match handled.kind {
      RenderKind::Handled => match self.popup.take() {
        Some(Popup::Picker(state)) => self.picked(state),
        Some(Popup::Confirmation(_)) => return self.exit(),
        Some(Popup::Alert(_)) | None => {}
      },
      RenderKind::Canceled => {
        if let Some(Popup::Picker(state)) = self.popup.take() {
          debug!(mode = %state.mode(), "picker cancelled");
        }
      }
      _ => return handled,
    }

    if self.popup.is_none() {
      self.popup = self.notices.pop_front().map(Alert::from).map(Popup::Alert);
    }
    RenderEvent::render()
  }
}

impl<E: Transcoder + Send + Sync + 'static> App<E> {
  pub async fn handle(&mut self, event: Event) -> RenderEvent {
    if let Event::Key(keys!(Char('c'), CONTROL, Press)) = event {
      return self.request_exit();
    }

    if self.popup.is_some() {
      return self.handle_popup(&event).await;
    }

    match event {
      Event::Key(key) => {
        if let Some(handled) = self.logs.handle_key(key) {
          return handled;
        }
        if let Some(handled) = self.handle_key(key).await {
          return handled;
        }
      }
      Event::Mouse(mouse) => {
        if let Some(handled) = self.logs.handle_mouse(mouse) {
          return handled;
        }
      }
      Event::Resize(..) => return RenderEvent::render(),
      Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
    }

    RenderEvent::no_ops()
  }

  pub async fn handle_key(&mut self, key: KeyEvent) -> Option<RenderEvent> {
    let handled = match key {
      keys!(Char('i'), NONE, Press) => self.open_picker(PickerMode::File).await,
      keys!(Char('o'), NONE, Press) => self.open_picker(PickerMode::Directory).await,
      keys!(Left, NONE, Press) => self.change_format(false),
      keys!(Right, NONE, Press) => self.change_format(true),
      keys!(Char('c'), NONE, Press) | keys!(Enter, NONE, Press) => self.convert(),
      keys!(Char('q'), NONE, Press) | keys!(Char('c'), CONTROL, Press) => self.request_exit(),
      _ => return None,
    };

    Some(handled)
  }

  async fn open_picker(&mut self, mode: PickerMode) -> RenderEvent {
    if self.state.is_converting() {
      self.logs.warn("A conversion is running, selections are locked until it finishes");
      return RenderEvent::render();
    }

    let entry = match mode {
      PickerMode::File => self.session.input_file().and_then(Path::parent),
      PickerMode::Directory => self.session.output_directory(),
    }
    .filter(|dir| !dir.as_os_str().is_empty())
    .map(Path::to_path_buf)
    .or_else(|| self.start_dir.clone());

    self.popup = Some(Popup::Picker(PickerState::open(mode, entry).await));
    RenderEvent::render()
  }

  /// Starts the engine off the UI loop. The outcome comes back through the `finished` channel.
  fn convert(&mut self) -> RenderEvent {
    if self.state.is_converting() {
      self.logs.warn("A conversion is already running");
      return RenderEvent::render();
    }
    if !self.session.is_convert_enabled() {
      return RenderEvent::no_ops();
    }

    let conversion = match self.session.prepare() {
      Ok(conversion) => conversion,
      Err(error) => {
        self.notify(Notice::from(ConvertError::from(error)));
        return RenderEvent::render();
      }
    };

    self.logs.info(format!("Converting {} into {}", conversion.input.display(), conversion.output.display()));
    self.state = State::Converting;

    let engine = Arc::clone(&self.engine);
    let finished = self.finished_tx.clone();
    self.tasks.spawn(async move {
      let notice = conversion.run(engine.as_ref()).await;
      if finished.send(notice).await.is_err() {
        warn!("conversion finished after the interface went away");
      }
    });

    RenderEvent::render()
  }
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::sync::atomic::{AtomicUsize, Ordering};

  use crossterm::event::{KeyCode, KeyModifiers};
  use tokio::sync::mpsc;

  use super::*;
  use crate::convert::{EngineError, OutputFormat};

  #[derive(Default, Clone)]
  struct FakeEngine {
    calls: Arc<AtomicUsize>,
    fail: bool,
  }

  impl Transcoder for FakeEngine {
    async fn transcode(&self, _input: &Path, _output: &Path) -> Result<(), EngineError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.fail {
        Err(EngineError::Failed {
          status: Some(1),
          stderr: String::from("Unknown encoder"),
        })
      } else {
        Ok(())
      }
    }
  }

  fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  async fn type_str(app: &mut App<FakeEngine>, value: &str) {
    for chr in value.chars() {
      app.handle(key(KeyCode::Char(chr))).await;
    }
  }

  fn new_app(session: Session, engine: FakeEngine) -> (App<FakeEngine>, mpsc::Receiver<Notice>) {
    let (finished_tx, finished_rx) = mpsc::channel(4);
    (App::new(session, engine, finished_tx), finished_rx)
  }

  fn ready_session() -> Session {
    let mut session = Session::default();
    session.select_input_file(Some(PathBuf::from("/videos/clip.mkv")));
    session.select_output_directory(Some(PathBuf::from("/out")));
    session
  }

  fn alert_notice(app: &App<FakeEngine>) -> Option<&Notice> {
    match app.popup() {
      Some(Popup::Alert(alert)) => Some(alert.notice()),
      _ => None,
    }
  }

  #[tokio::test]
  async fn test_pick_convert_and_acknowledge() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("clip.mkv"), b"media").unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();

    let engine = FakeEngine::default();
    let calls = Arc::clone(&engine.calls);
    let (app, mut finished) = new_app(Session::default(), engine);
    let mut app = app.start_dir(tmp.path().to_path_buf());

    app.handle(key(KeyCode::Char('i'))).await;
    assert!(matches!(app.popup(), Some(Popup::Picker(_))));
    type_str(&mut app, "clip").await;
    app.handle(key(KeyCode::Enter)).await;
    assert!(app.popup().is_none());
    assert_eq!(app.session().status(), "Selected: clip.mkv");
    assert!(!app.session().is_convert_enabled());

    app.handle(key(KeyCode::Char('o'))).await;
    type_str(&mut app, "out").await;
    app.handle(key(KeyCode::Enter)).await;
    assert!(app.session().is_convert_enabled());
    assert_eq!(alert_notice(&app).map(|notice| notice.title.as_str()), Some("Output Directory Selected"));

    app.handle(key(KeyCode::Enter)).await;
    assert!(app.popup().is_none());

    app.handle(key(KeyCode::Char('c'))).await;
    assert!(app.state().is_converting());

    // selections are locked until the engine reports back
    app.handle(key(KeyCode::Char('i'))).await;
    assert!(app.popup().is_none());

    let notice = finished.recv().await.unwrap();
    app.finish(notice);
    assert!(app.state().is_idle());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let notice = alert_notice(&app).unwrap();
    assert_eq!(notice.title, "Success");
    assert!(notice.body.ends_with(&format!("out{}clip.mp3", std::path::MAIN_SEPARATOR)));
  }

  #[tokio::test]
  async fn test_cancelled_picker_leaves_session_alone() {
    let (mut app, _finished) = new_app(ready_session(), FakeEngine::default());

    app.handle(key(KeyCode::Char('o'))).await;
    assert!(matches!(app.popup(), Some(Popup::Picker(_))));
    app.handle(key(KeyCode::Esc)).await;

    assert!(app.popup().is_none());
    assert_eq!(app.session().output_directory(), Some(Path::new("/out")));
    assert!(app.session().is_convert_enabled());
  }

  #[tokio::test]
  async fn test_convert_is_ignored_until_enabled() {
    let engine = FakeEngine::default();
    let calls = Arc::clone(&engine.calls);
    let (mut app, _finished) = new_app(Session::default(), engine);

    let handled = app.handle(key(KeyCode::Char('c'))).await;
    assert!(handled.kind.is_no_ops());
    assert!(app.state().is_idle());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_engine_failure_becomes_critical_alert() {
    let engine = FakeEngine { fail: true, ..Default::default() };
    let (mut app, mut finished) = new_app(ready_session(), engine);

    app.handle(key(KeyCode::Enter)).await;
    let notice = finished.recv().await.unwrap();
    app.finish(notice);

    let notice = alert_notice(&app).unwrap();
    assert!(notice.level.is_critical());
    assert_eq!(notice.body, "Conversion failed:\nUnknown encoder");
    assert!(app.logs().iter().any(|log| matches!(log, Log::Error { .. })));
    assert!(app.session().is_convert_enabled());
  }

  #[tokio::test]
  async fn test_format_keys_cycle() {
    let (mut app, _finished) = new_app(Session::default(), FakeEngine::default());

    app.handle(key(KeyCode::Right)).await;
    assert_eq!(app.session().format(), Some(OutputFormat::Mp4));
    app.handle(key(KeyCode::Left)).await;
    app.handle(key(KeyCode::Left)).await;
    assert_eq!(app.session().format(), Some(OutputFormat::Flac));
  }

  #[tokio::test]
  async fn test_quit_asks_only_while_converting() {
    let (mut app, _finished) = new_app(ready_session(), FakeEngine::default());
    app.handle(key(KeyCode::Char('c'))).await;

    app.handle(key(KeyCode::Char('q'))).await;
    assert!(matches!(app.popup(), Some(Popup::Confirmation(_))));
    app.handle(key(KeyCode::Char('n'))).await;
    assert!(app.popup().is_none());
    assert!(app.state().is_converting());

    app.handle(key(KeyCode::Char('q'))).await;
    let handled = app.handle(key(KeyCode::Char('y'))).await;
    assert!(handled.kind.is_exit());
    assert!(app.is_exiting());

    let (mut idle, _finished) = new_app(Session::default(), FakeEngine::default());
    assert!(idle.handle(key(KeyCode::Char('q'))).await.kind.is_exit());
  }

  #[tokio::test]
  async fn test_notices_queue_behind_each_other() {
    let (mut app, _finished) = new_app(Session::default(), FakeEngine::default());
    app.notify(Notice::warning("Engine Not Found", "ffmpeg is missing"));
    app.notify(Notice::info("Second", "queued"));

    assert_eq!(alert_notice(&app).map(|notice| notice.title.as_str()), Some("Engine Not Found"));
    app.handle(key(KeyCode::Enter)).await;
    assert_eq!(alert_notice(&app).map(|notice| notice.title.as_str()), Some("Second"));
    app.handle(key(KeyCode::Esc)).await;
    assert!(app.popup().is_none());
    assert_eq!(app.logs().len(), 2);
  }
}
