use std::fs::File;
use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Sends `tracing` output to `path`; the terminal itself belongs to the UI.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(path: &Path) -> anyhow::Result<WorkerGuard> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
  let (writer, guard) = tracing_appender::non_blocking(file);

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_writer(writer).with_target(true).with_ansi(false))
    .try_init()
    .context("tracing subscriber already installed")?;

  Ok(guard)
}
