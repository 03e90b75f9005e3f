//! Session state and the single pass-through call into the transcoding engine.

mod engine;
mod error;
mod format;
mod notice;
mod session;

pub use engine::{Ffmpeg, Transcoder};
pub use error::{ConvertError, EngineError, ValidationError};
pub use format::{OutputFormat, output_path};
pub use notice::{Notice, NoticeLevel};
pub use session::{Conversion, Session};
