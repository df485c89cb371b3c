//! Core game logic - pure, deterministic, and testable
//!
//! Everything a falling-block game needs to run, with no terminal, timing or
//! I/O code. A host owns one [`GameSession`], calls [`tick`] at a fixed rate
//! with at most one [`InputEvent`](types::InputEvent), and draws the returned
//! [`RenderSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven 4x4 templates and their colors
//! - [`board`]: 10x20 grid of locked cells, row detection and clearing
//! - [`collision`]: the single placement rule shared by every move
//! - [`piece`]: the active piece, ghost row and rotation probing
//! - [`scoring`]: line clear table, hard drop bonus, levels and gravity
//! - [`rng`]: seeded and scripted shape sources
//! - [`session`]: the state machine tying it all together
//! - [`driver`]: one tick = spawn, input, gravity
//! - [`snapshot`]: plain data for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{tick, GameSession};
//! use blockfall_core::types::{InputEvent, SessionState};
//!
//! let mut session = GameSession::with_seed(12345);
//!
//! let snap = tick(&mut session, None);
//! assert_eq!(snap.state, SessionState::Active);
//!
//! let snap = tick(&mut session, Some(InputEvent::HardDrop));
//! assert_eq!(snap.state, SessionState::Spawning);
//! assert!(snap.score > 0); // Hard drop awards points
//! ```

pub mod board;
pub mod collision;
pub mod driver;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use driver::{tick, tick_into};
pub use piece::Piece;
pub use rng::{ShapeSequence, ShapeSource, SimpleRng};
pub use session::{ClearedRows, GameSession, LockEvent};
pub use shapes::{shape, template, Occupancy};
pub use snapshot::{ActiveSnapshot, RenderSnapshot};
