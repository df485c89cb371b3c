//! Render snapshot - plain data handed to a renderer after every tick
//!
//! `Copy` and allocation free so a host can keep one around and refill it
//! with [`GameSession::snapshot_into`] each frame.

use crate::piece::Piece;
use crate::rng::ShapeSource;
use crate::session::GameSession;
use crate::shapes::{color, Occupancy};
use crate::types::{ColorTag, SessionState, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSnapshot {
    pub shape: ShapeId,
    pub color: ColorTag,
    pub grid: Occupancy,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells, possibly above the top row.
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        let mut cells = [(0i8, 0i8); 4];
        for (slot, cell) in cells.iter_mut().zip(value.board_cells()) {
            *slot = cell;
        }
        Self {
            shape: value.shape,
            color: color(value.shape),
            grid: value.grid,
            x: value.x,
            y: value.y,
            cells,
        }
    }
}

impl ActiveSnapshot {
    /// The same cells moved down to `ghost_y`.
    pub fn ghost_cells(&self, ghost_y: i8) -> [(i8, i8); 4] {
        let dy = ghost_y - self.y;
        self.cells.map(|(x, y)| (x, y + dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    /// Locked cells, 0 empty or shape id + 1.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: ShapeId,
    pub hold: Option<ShapeId>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub state: SessionState,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.ghost_y = None;
        self.next = ShapeId::I;
        self.hold = None;
        self.can_hold = true;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.state = SessionState::Spawning;
        self.game_over = false;
    }

    /// Locked shape at (x, y), if any.
    pub fn locked_at(&self, x: usize, y: usize) -> Option<ShapeId> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&v| ShapeId::from_cell(v))
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: ShapeId::I,
            hold: None,
            can_hold: true,
            score: 0,
            level: 0,
            lines: 0,
            state: SessionState::Spawning,
            game_over: false,
        }
    }
}

impl<S: ShapeSource> GameSession<S> {
    /// Fill `out` without allocating.
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        self.board().write_u8_grid(&mut out.board);
        out.active = self.active().copied().map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next_shape();
        out.hold = self.held_shape();
        out.can_hold = self.can_hold();
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.state = self.state();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut out = RenderSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
