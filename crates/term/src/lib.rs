//! Terminal game renderer.
//!
//! Renders a core [`RenderSnapshot`](core::RenderSnapshot) into a plain
//! framebuffer of styled characters, then flushes it to a `crossterm`
//! terminal. No widget toolkit: the well is drawn two columns per cell to
//! keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::TerminalRenderer;
