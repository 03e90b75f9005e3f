use std::io::{Error, ErrorKind, Result};

use crossterm::event::{Event, EventStream};
use futures::{FutureExt, StreamExt};

/// Terminal event source for the UI loop.
#[derive(Default)]
pub struct PollEvent {
  inner: EventStream,
}

impl PollEvent {
  /// Waits for the next terminal event. Cancel safe, so it can sit in a `select!`.
  pub async fn fuse_read(&mut self) -> Result<Event> {
    match self.inner.next().fuse().await {
      Some(event) => event,
      None => Err(Error::new(ErrorKind::UnexpectedEof, "terminal event stream closed")),
    }
  }
}
