//! Shape definitions and rotation.
//!
//! The seven canonical shapes are boolean occupancy matrices packed into a
//! 16-bit word (bit `row * cols + col`, low bits first). Rotation is a pure
//! 90-degree-clockwise matrix transform; four applications are the
//! identity.

use arrayvec::ArrayVec;

pub const SHAPE_COUNT: usize = 7;

/// Every canonical shape occupies exactly four cells.
pub const CELLS_PER_PIECE: usize = 4;

/// Immutable occupancy matrix for one piece shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: u16,
}

/// The seven canonical shapes in bag-index order: I, O, T, S, Z, J, L.
/// Bit groups below are written high row first; within a group the least
/// significant bit is the first column.
pub const SHAPES: [Shape; SHAPE_COUNT] = [
    Shape::new(4, 1, 0b1_1_1_1),  // I: vertical bar
    Shape::new(2, 2, 0b11_11),    // O: square
    Shape::new(2, 3, 0b111_010),  // T
    Shape::new(2, 3, 0b011_110),  // S
    Shape::new(2, 3, 0b110_011),  // Z
    Shape::new(2, 3, 0b111_001),  // J
    Shape::new(2, 3, 0b111_100),  // L
];

impl Shape {
    pub const fn new(rows: u8, cols: u8, bits: u16) -> Self {
        Self { rows, cols, bits }
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the bounding-box cell at (row, col) is occupied.
    pub fn filled(&self, row: u8, col: u8) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.bits >> (row * self.cols + col) & 1 == 1
    }

    /// New shape rotated 90 degrees clockwise: (r, c) -> (c, rows-1-r).
    pub fn rotate_cw(&self) -> Shape {
        let mut bits: u16 = 0;
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.filled(r, c) {
                    let nr = c;
                    let nc = self.rows - 1 - r;
                    bits |= 1 << (nr * self.rows + nc);
                }
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Shape after `times` clockwise quarter turns.
    pub fn rotated(&self, times: u8) -> Shape {
        let mut shape = *self;
        for _ in 0..times % 4 {
            shape = shape.rotate_cw();
        }
        shape
    }

    /// Occupied cells as (row, col) offsets in row-major order. Piece
    /// letters are assigned in this enumeration order.
    pub fn cells(&self) -> ArrayVec<(u8, u8), CELLS_PER_PIECE> {
        let mut cells = ArrayVec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.filled(r, c) {
                    cells.push((r, c));
                }
            }
        }
        cells
    }
}
