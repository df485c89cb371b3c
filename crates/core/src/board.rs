//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the shape that
//! locked there. Storage is a flat row-major array (no allocation).
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, ShapeId, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Indices of full rows, stack allocated.
pub type FullRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a locked cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// True iff all ten cells of row `y` are filled. Rows outside the board are never full.
    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> FullRows {
        let mut rows = FullRows::new();
        for y in (0..HEIGHT).filter(|&y| self.is_row_full(y)) {
            rows.push(y);
        }
        rows
    }

    /// Remove the listed rows and let everything above fall into their place.
    ///
    /// Removal is simultaneous: the listed order and duplicates don't matter.
    /// Vacated rows at the top become empty. Returns the number of rows removed.
    ///
    /// # Panics
    ///
    /// If any index is outside `0..BOARD_HEIGHT`.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let mut remove = [false; HEIGHT];
        for &y in rows {
            assert!(y < HEIGHT, "row {} is outside the board", y);
            remove[y] = true;
        }

        // Compact surviving rows toward the bottom with a write cursor.
        let mut write_y = HEIGHT;
        for read_y in (0..HEIGHT).rev() {
            if remove[read_y] {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                self.cells
                    .copy_within(read_y * WIDTH..(read_y + 1) * WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        write_y
    }

    /// Merge a piece into the board.
    ///
    /// Cells above the top edge (row < 0) are dropped; every other cell is
    /// written with the piece's shape.
    ///
    /// # Panics
    ///
    /// If an in-height cell falls outside the board columns or below the floor.
    /// Callers lock only placements the collision check accepted.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.board_cells() {
            if y < 0 {
                continue;
            }
            let placed = self.set(x, y, Some(piece.shape));
            assert!(placed, "locked cell ({}, {}) is outside the board", x, y);
        }
    }

    /// Number of non-empty cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write cell values as `u8` (0 empty, shape id + 1 otherwise) into a grid.
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * WIDTH + x].map_or(0, ShapeId::cell_value);
            }
        }
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty and a shape letter is a locked cell; rows shorter than
    /// the board are padded with empty cells at the top.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(rows.len() <= HEIGHT, "too many rows");
        let mut board = Self::new();
        let offset = HEIGHT - rows.len();
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), WIDTH, "row {:?} is not {} wide", line, WIDTH);
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    c => Some(
                        ShapeId::from_str(&c.to_string())
                            .unwrap_or_else(|| panic!("unknown cell {:?}", c)),
                    ),
                };
                board.set(x as i8, (offset + i) as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
