//! Terminal input module
//!
//! Maps `crossterm` key events to [`InputEvent`](types::InputEvent)s and
//! buffers them so the tick loop can take one per tick. Restart and exit are
//! host concerns and get their own predicates instead of game events.

pub mod map;
pub mod queue;

pub use blockfall_types as types;

pub use map::{is_restart, map_key_event, should_exit};
pub use queue::{EventQueue, DEFAULT_QUEUE_CAPACITY};
