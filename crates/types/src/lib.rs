//! Shared types and constants for the blockfall workspace.
//!
//! Everything here is plain data with no behavior beyond conversions, so it
//! can be used by the core rules, the terminal front end and any host driver.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 on top)
//! - **Spawn origin**: (3, 0), the top-left corner of the 4x4 piece grid
//!
//! # Gravity
//!
//! Gravity is measured in ticks, not milliseconds. The host decides how long a
//! tick lasts (see [`DEFAULT_TICK_MS`]).
//!
//! | Level | Interval (ticks) |
//! |-------|------------------|
//! | 1 | 20 |
//! | 2 | 18 |
//! | 3 | 16 |
//! | ... | -2 per level |
//! | 10+ | 2 (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{InputEvent, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//! assert_eq!(ShapeId::T.index(), 2);
//! assert_eq!(ShapeId::from_cell(ShapeId::T.cell_value()), Some(ShapeId::T));
//!
//! assert_eq!(InputEvent::from_str("hardDrop"), Some(InputEvent::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square occupancy grid every shape lives in.
pub const GRID_SIZE: usize = 4;

/// Spawn column of the piece grid's left edge (`BOARD_WIDTH / 2 - 2`).
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Spawn row of the piece grid's top edge.
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at level 1, in ticks.
pub const INITIAL_GRAVITY_INTERVAL: u32 = 20;

/// Ticks removed from the gravity interval on every level up.
pub const GRAVITY_INTERVAL_STEP: u32 = 2;

/// The gravity interval never shrinks below this many ticks.
pub const MIN_GRAVITY_INTERVAL: u32 = 2;

/// Starting level of a fresh session.
pub const STARTING_LEVEL: u32 = 1;

/// Lines needed per level; the level advances once total lines reach `level * LINES_PER_LEVEL`.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// - 1 line: 40
/// - 2 lines: 100
/// - 3 lines: 300
/// - 4 lines: 1200
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Hard drop bonus per row travelled.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Suggested wall-clock length of one tick for interactive play.
pub const DEFAULT_TICK_MS: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_origin_is_centered() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
        // A 4-wide grid at the spawn column leaves 3 free columns on each side.
        assert_eq!(SPAWN_X as u8 + GRID_SIZE as u8 + SPAWN_X as u8, BOARD_WIDTH);
    }

    #[test]
    fn gravity_defaults() {
        assert_eq!(INITIAL_GRAVITY_INTERVAL, 20);
        assert_eq!(GRAVITY_INTERVAL_STEP, 2);
        assert_eq!(MIN_GRAVITY_INTERVAL, 2);
        assert_eq!(STARTING_LEVEL, 1);
    }

    #[test]
    fn shape_index_roundtrip() {
        for (i, id) in ShapeId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(ShapeId::from_index(i), Some(*id));
            assert_eq!(ShapeId::from_cell(id.cell_value()), Some(*id));
        }
        assert_eq!(ShapeId::from_index(7), None);
        assert_eq!(ShapeId::from_cell(0), None);
        assert_eq!(ShapeId::from_cell(8), None);
    }

    #[test]
    fn input_event_names() {
        for ev in [
            InputEvent::MoveLeft,
            InputEvent::MoveRight,
            InputEvent::SoftDrop,
            InputEvent::HardDrop,
            InputEvent::Rotate,
            InputEvent::Hold,
            InputEvent::Quit,
        ] {
            assert_eq!(InputEvent::from_str(ev.as_str()), Some(ev));
        }
        assert_eq!(InputEvent::from_str("pause"), None);
    }
}

/// The seven tetromino shapes.
///
/// Declaration order is the shape id (0..6) used by the catalog and by board
/// cells, which store `id + 1` so that 0 can mean empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeId {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeId {
    /// All shapes in id order.
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::O,
        ShapeId::T,
        ShapeId::L,
        ShapeId::J,
        ShapeId::S,
        ShapeId::Z,
    ];

    /// Numeric id in 0..7.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape for a numeric id, or `None` outside 0..7.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value written into a board cell when this shape locks (`id + 1`).
    pub fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`ShapeId::cell_value`]; 0 and unknown values map to `None`.
    pub fn from_cell(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Parse a shape letter (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("Z"), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "o" => Some(ShapeId::O),
            "t" => Some(ShapeId::T),
            "l" => Some(ShapeId::L),
            "j" => Some(ShapeId::J),
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "I",
            ShapeId::O => "O",
            ShapeId::T => "T",
            ShapeId::L => "L",
            ShapeId::J => "J",
            ShapeId::S => "S",
            ShapeId::Z => "Z",
        }
    }
}

/// Display color tag of a shape.
///
/// These are palette names, not concrete colors; the renderer picks the RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorTag {
    LightCyan,
    Yellow,
    Magenta,
    Brown,
    Blue,
    Green,
    Red,
}

/// Discrete input consumed by a tick.
///
/// At most one event is applied per tick; "no input" is `Option::None` at the
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputEvent {
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Move the piece one row down, locking it if it is already resting
    SoftDrop,
    /// Drop to the ghost row and lock immediately
    HardDrop,
    /// Rotate 90° clockwise, trying a small fixed set of offsets
    Rotate,
    /// Swap with the hold slot (once per spawned piece)
    Hold,
    /// End the session
    Quit,
}

impl InputEvent {
    /// Parse an event name (case-insensitive, camelCase or lowercase)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(InputEvent::MoveLeft),
            "moveright" => Some(InputEvent::MoveRight),
            "softdrop" => Some(InputEvent::SoftDrop),
            "harddrop" => Some(InputEvent::HardDrop),
            "rotate" => Some(InputEvent::Rotate),
            "hold" => Some(InputEvent::Hold),
            "quit" => Some(InputEvent::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::HardDrop => "hardDrop",
            InputEvent::Rotate => "rotate",
            InputEvent::Hold => "hold",
            InputEvent::Quit => "quit",
        }
    }
}

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionState {
    /// The next tick draws a new active piece.
    Spawning,
    /// A piece is falling and accepts input.
    Active,
    /// Terminal; only a restart leaves this state.
    GameOver,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(ShapeId)`: locked cell of that shape
pub type Cell = Option<ShapeId>;
