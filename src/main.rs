use std::io::stdout;

use clap::Parser;
use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use helper::{PollEvent, RenderEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::{DefaultTerminal, Terminal};
use tokio::select;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::App;
use crate::args::AppArgs;
use crate::convert::{Ffmpeg, Notice, Session};

pub mod app;
pub mod areas;
pub mod args;
pub mod convert;
pub mod logging;
pub mod ui;
pub mod widgets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = AppArgs::parse();
  let _guard = logging::init(&args.log_file())?;
  info!(?args, "starting");

  let engine = Ffmpeg::new(&args.ffmpeg);
  let installed = engine.is_installed().await;
  let (finished_tx, mut finished) = mpsc::channel(4);

  let mut app = App::new(Session::new(args.format), engine, finished_tx).start_dir(args.start_dir.clone());
  app.seed(args.input.clone(), args.output_dir.clone()).await;
  if !installed {
    let body = format!(
      "Could not run `{} -version`.\nConversions will fail until ffmpeg is installed or --ffmpeg points to it.",
      args.ffmpeg.display()
    );
    app.notify(Notice::warning("Engine Not Found", body));
  }

  let backend = CrosstermBackend::new(stdout());
  let mut terminal = Terminal::new(backend)?;
  terminal.hide_cursor()?;
  enable_raw_mode()?;
  execute!(terminal.backend_mut(), EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;

  let status = run(&mut terminal, &mut app, &mut finished, &args).await;

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste)?;
  terminal.show_cursor()?;

  if let Err(ref error) = status {
    error!(%error, "ui loop stopped");
  }
  info!("exiting");
  status
}

async fn run(terminal: &mut DefaultTerminal, app: &mut App, finished: &mut mpsc::Receiver<Notice>, args: &AppArgs) -> anyhow::Result<()> {
  let mut fps = args.create_fps_interval();
  let mut events = PollEvent::default();
  terminal.draw(|frame| frame.render_widget(&*app, frame.area()))?;

  while !app.is_exiting() {
    let handled = select! {
      _ = fps.tick() => RenderEvent::render(),
      Some(notice) = finished.recv() => app.finish(notice),
      event = events.fuse_read() => app.handle(event?).await,
    };

    if handled.kind.is_exit() {
      break;
    } else if handled.kind.is_render() {
      terminal.draw(|frame| frame.render_widget(&*app, frame.area()))?;
    }
  }

  Ok(())
}
