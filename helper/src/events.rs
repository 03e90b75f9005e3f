mod poll_event;
mod render_event;

pub use poll_event::PollEvent;
pub use render_event::{RenderEvent, RenderKind};
