//! Shape catalog - the seven tetromino templates
//!
//! Every shape is a 4x4 occupancy grid (row 0 on top) plus a display color.
//! Templates are `const` data; pieces work on owned copies so a rotation never
//! touches the catalog.

use crate::types::{ColorTag, ShapeId, GRID_SIZE};

/// A 4x4 occupancy grid, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupancy {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Occupancy {
    pub const fn from_rows(cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Whether (row, col) is occupied. Out-of-grid positions are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Occupied cells as `(row, col)` offsets, top to bottom, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90° clockwise: cell (i, j) moves to (j, 3 - i).
    pub fn rotated_cw(&self) -> Self {
        let mut out = [[false; GRID_SIZE]; GRID_SIZE];
        for (i, line) in self.cells.iter().enumerate() {
            for (j, &filled) in line.iter().enumerate() {
                out[j][GRID_SIZE - 1 - i] = filled;
            }
        }
        Self { cells: out }
    }
}

const X: bool = true;
const O: bool = false;

const I_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [X, X, X, X],
    [O, O, O, O],
    [O, O, O, O],
]);

const O_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [O, X, X, O],
    [O, X, X, O],
    [O, O, O, O],
]);

const T_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [O, X, O, O],
    [X, X, X, O],
    [O, O, O, O],
]);

const L_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [O, O, X, O],
    [X, X, X, O],
    [O, O, O, O],
]);

const J_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [X, O, O, O],
    [X, X, X, O],
    [O, O, O, O],
]);

const S_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [O, X, X, O],
    [X, X, O, O],
    [O, O, O, O],
]);

const Z_GRID: Occupancy = Occupancy::from_rows([
    [O, O, O, O],
    [X, X, O, O],
    [O, X, X, O],
    [O, O, O, O],
]);

/// Template grid and color for a shape.
pub fn shape(id: ShapeId) -> (Occupancy, ColorTag) {
    (template(id), color(id))
}

pub fn template(id: ShapeId) -> Occupancy {
    match id {
        ShapeId::I => I_GRID,
        ShapeId::O => O_GRID,
        ShapeId::T => T_GRID,
        ShapeId::L => L_GRID,
        ShapeId::J => J_GRID,
        ShapeId::S => S_GRID,
        ShapeId::Z => Z_GRID,
    }
}

pub fn color(id: ShapeId) -> ColorTag {
    match id {
        ShapeId::I => ColorTag::LightCyan,
        ShapeId::O => ColorTag::Yellow,
        ShapeId::T => ColorTag::Magenta,
        ShapeId::L => ColorTag::Brown,
        ShapeId::J => ColorTag::Blue,
        ShapeId::S => ColorTag::Green,
        ShapeId::Z => ColorTag::Red,
    }
}
