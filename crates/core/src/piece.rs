//! Active piece - an owned, rotatable copy of a catalog shape at a board origin

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::{template, Occupancy};
use crate::types::{ShapeId, SPAWN_X, SPAWN_Y};

/// Offsets tried, in order, when a plain rotation collides.
///
/// One column right, one column left, then one row up. There is no full
/// kick table.
pub const ROTATION_KICKS: [(i8, i8); 3] = [(1, 0), (-1, 0), (0, -1)];

/// Falling tetromino
///
/// `x`/`y` locate the top-left corner of the 4x4 grid; `y` may be negative
/// while the piece pokes out above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeId,
    pub grid: Occupancy,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Catalog template at the spawn origin
    pub fn spawn(shape: ShapeId) -> Self {
        Self {
            shape,
            grid: template(shape),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute (x, y) board coordinates of the occupied cells.
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.grid
            .cells()
            .map(move |(row, col)| (self.x + col as i8, self.y + row as i8))
    }

    pub fn collides_at(&self, board: &Board, x: i8, y: i8) -> bool {
        collides(board, &self.grid, x, y)
    }

    pub fn collides(&self, board: &Board) -> bool {
        self.collides_at(board, self.x, self.y)
    }

    /// Row the piece would rest on if dropped straight down from here.
    pub fn ghost_y(&self, board: &Board) -> i8 {
        let mut y = self.y;
        while !self.collides_at(board, self.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Clockwise rotation with the fixed kick order.
    ///
    /// Returns the rotated piece (possibly shifted by one kick offset), or
    /// `None` when the rotation and every kick collide.
    pub fn rotated(&self, board: &Board) -> Option<Piece> {
        let grid = self.grid.rotated_cw();
        if !collides(board, &grid, self.x, self.y) {
            return Some(Piece { grid, ..*self });
        }

        ROTATION_KICKS.iter().find_map(|&(dx, dy)| {
            let (x, y) = (self.x + dx, self.y + dy);
            (!collides(board, &grid, x, y)).then_some(Piece { grid, x, y, ..*self })
        })
    }
}
