//! Board model - pure grid operations.
//!
//! The board is a 10x20 grid stored as a flat array for cache locality.
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge.
//! Every mutating operation returns a new `Board` value and leaves the
//! input untouched, so callers can keep historical snapshots for replay.
//! The board knows nothing about words or scoring.

use crate::pieces::Piece;
use crate::rng::SplitMix64;
use letterfall_types::{
    Cell, CellKind, BOARD_HEIGHT, BOARD_WIDTH, BOMB_CHAR, JUNK_GAP_RATE, SPAWN_ROWS, WILDCARD_CHAR,
};

/// Total number of cells on the board.
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The game board - flat array of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Flat index for (row, col); `None` when out of bounds.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row as usize >= BOARD_HEIGHT || col < 0 || col as usize >= BOARD_WIDTH {
            return None;
        }
        Some(row as usize * BOARD_WIDTH + col as usize)
    }

    /// Cell at (row, col); `None` when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// New board with a single cell replaced. Out-of-bounds coordinates
    /// return the board unchanged.
    pub fn with_cell(&self, row: i8, col: i8, cell: Cell) -> Board {
        let mut next = self.clone();
        if let Some(idx) = Self::index(row, col) {
            next.cells[idx] = cell;
        }
        next
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True iff every occupied cell of the piece, hypothetically moved to
    /// (row, col) and rotated to `rot`, lies in bounds over an empty cell.
    pub fn is_valid_position(&self, piece: &Piece, row: i8, col: i8, rot: u8) -> bool {
        let shape = piece.shape.rotated(rot);
        shape.cells().iter().all(|&(r, c)| {
            match Self::index(row + r as i8, col + c as i8) {
                Some(idx) => self.cells[idx].is_empty(),
                None => false,
            }
        })
    }

    pub fn can_move_down(&self, piece: &Piece) -> bool {
        self.is_valid_position(piece, piece.row + 1, piece.col, piece.rot)
    }

    pub fn can_move_left(&self, piece: &Piece) -> bool {
        self.is_valid_position(piece, piece.row, piece.col - 1, piece.rot)
    }

    pub fn can_move_right(&self, piece: &Piece) -> bool {
        self.is_valid_position(piece, piece.row, piece.col + 1, piece.rot)
    }

    pub fn can_rotate(&self, piece: &Piece) -> bool {
        self.is_valid_position(piece, piece.row, piece.col, (piece.rot + 1) % 4)
    }

    /// Lowest row the piece can legally occupy from its current position.
    pub fn hard_drop_row(&self, piece: &Piece) -> i8 {
        let mut drop_row = piece.row;
        while self.is_valid_position(piece, drop_row + 1, piece.col, piece.rot) {
            drop_row += 1;
        }
        drop_row
    }

    /// Write the piece's letters into the board at its current position.
    /// The wildcard marker becomes a wild cell and the bomb marker a bomb
    /// cell; everything else is a letter cell.
    pub fn place(&self, piece: &Piece) -> Board {
        let mut next = self.clone();
        let shape = piece.current_shape();
        for (i, &(r, c)) in shape.cells().iter().enumerate() {
            let Some(idx) = Self::index(piece.row + r as i8, piece.col + c as i8) else {
                continue;
            };
            let Some(&ch) = piece.letters.get(i) else {
                continue;
            };
            next.cells[idx] = match ch {
                WILDCARD_CHAR => Cell::wild(),
                BOMB_CHAR => Cell::bomb(),
                _ => Cell::letter(ch),
            };
        }
        next
    }

    /// New board with exactly the listed cells marked for clearing and
    /// every other mark dropped.
    pub fn mark_cells(&self, coords: &[(usize, usize)]) -> Board {
        let mut next = self.clone();
        for cell in next.cells.iter_mut() {
            cell.marked = false;
        }
        for &(row, col) in coords {
            if row < BOARD_HEIGHT && col < BOARD_WIDTH {
                next.cells[row * BOARD_WIDTH + col].marked = true;
            }
        }
        next
    }

    /// Replace every marked cell with an empty one and unmark the rest.
    pub fn clear_marked(&self) -> Board {
        let mut next = self.clone();
        for cell in next.cells.iter_mut() {
            if cell.marked {
                *cell = Cell::EMPTY;
            } else {
                cell.marked = false;
            }
        }
        next
    }

    /// Compact each column downward, preserving relative order, leaving
    /// empties at the top. Columns never interact.
    pub fn apply_gravity(&self) -> Board {
        let mut next = Board::new();
        for col in 0..BOARD_WIDTH {
            let mut write_row = BOARD_HEIGHT;
            for row in (0..BOARD_HEIGHT).rev() {
                let cell = self.cells[row * BOARD_WIDTH + col];
                if !cell.is_empty() {
                    write_row -= 1;
                    next.cells[write_row * BOARD_WIDTH + col] = cell;
                }
            }
        }
        next
    }

    /// Drop the top `n` rows off the board and append `n` junk rows at the
    /// bottom. Each new cell is left empty with a small gap probability,
    /// otherwise junk with a uniformly drawn letter. Junk generation
    /// consumes the caller's generator so it stays seed-deterministic.
    pub fn add_junk_rows(&self, n: u32, rng: &mut SplitMix64) -> Board {
        let n = n as usize;
        if n == 0 {
            return self.clone();
        }
        let n = n.min(BOARD_HEIGHT);

        let mut next = Board::new();
        // Shift surviving rows up by n.
        for row in n..BOARD_HEIGHT {
            let src = row * BOARD_WIDTH;
            let dst = (row - n) * BOARD_WIDTH;
            next.cells[dst..dst + BOARD_WIDTH]
                .copy_from_slice(&self.cells[src..src + BOARD_WIDTH]);
        }
        // Fill the vacated bottom rows with junk.
        for row in BOARD_HEIGHT - n..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let cell = if rng.next_bool(JUNK_GAP_RATE) {
                    Cell::EMPTY
                } else {
                    let letter = (b'A' + rng.next_int(26) as u8) as char;
                    Cell::junk(letter)
                };
                next.cells[row * BOARD_WIDTH + col] = cell;
            }
        }
        next
    }

    /// A new piece can spawn iff any cell in the top rows is empty.
    pub fn has_spawn_room(&self) -> bool {
        self.cells[..SPAWN_ROWS * BOARD_WIDTH]
            .iter()
            .any(|cell| cell.is_empty())
    }

    /// Number of non-empty cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Place a row of letter cells, for tests and scripted scenarios.
    pub fn with_word(&self, row: usize, col: usize, word: &str) -> Board {
        let mut next = self.clone();
        for (i, ch) in word.chars().enumerate() {
            let cell = match ch {
                WILDCARD_CHAR => Cell::wild(),
                BOMB_CHAR => Cell::bomb(),
                _ => Cell::letter(ch),
            };
            if row < BOARD_HEIGHT && col + i < BOARD_WIDTH {
                next.cells[row * BOARD_WIDTH + col + i] = cell;
            }
        }
        next
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Count of cells of a given kind, mostly useful in tests.
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
