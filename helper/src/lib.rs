mod events;
mod internal_macros;

pub use events::*;
