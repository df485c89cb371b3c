//! Collision oracle
//!
//! The only placement rule of the game. Side walls and the floor are hard;
//! the space above row 0 is open so pieces can spawn partly off-screen, but
//! any in-bounds overlap with a locked cell collides.

use crate::board::Board;
use crate::shapes::Occupancy;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Would `grid` placed with its top-left corner at (`x`, `y`) hit a wall,
/// the floor, or a locked cell?
pub fn collides(board: &Board, grid: &Occupancy, x: i8, y: i8) -> bool {
    grid.cells().any(|(row, col)| {
        let cx = x + col as i8;
        let cy = y + row as i8;
        if cx < 0 || cx >= BOARD_WIDTH as i8 || cy >= BOARD_HEIGHT as i8 {
            return true;
        }
        cy >= 0 && board.is_occupied(cx, cy)
    })
}
