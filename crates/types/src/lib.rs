//! Core types shared across the letterfall crates.
//! This module contains pure data types with no external dependencies.

/// Board dimensions (fixed for a match)
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Rows checked for spawn room; a board with no empty cell in the top
/// `SPAWN_ROWS` rows cannot host a new piece (game over).
pub const SPAWN_ROWS: usize = 4;

/// Game timing constants (in milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const LOCK_DELAY_MS: u32 = 500;
/// Fixed lock-timer increment applied per rejected down-move.
pub const LOCK_STEP_MS: u32 = 100;
/// Drop interval shrinks by this much per level above 1.
pub const DROP_SPEEDUP_PER_LEVEL_MS: u32 = 50;
pub const DROP_INTERVAL_FLOOR_MS: u32 = 50;

/// Number of shapes visible in the upcoming-piece preview.
pub const QUEUE_SIZE: usize = 5;

/// Attacks land this long after the triggering word clears.
pub const ATTACK_DELAY_MS: u64 = 1000;

/// Hard bound on cascade iterations per lock event.
pub const CASCADE_LIMIT: u32 = 20;

/// Minimum run length that can qualify as a word.
pub const MIN_WORD_LEN: usize = 3;

/// Marker characters carried by in-flight pieces before placement.
pub const WILDCARD_CHAR: char = '?';
pub const BOMB_CHAR: char = '*';

/// Special-tile thresholds on a single [0, 1) draw per piece cell:
/// below `WILDCARD_RATE` is a wildcard, below `BOMB_CUTOFF` a bomb.
pub const WILDCARD_RATE: f64 = 0.02;
pub const BOMB_CUTOFF: f64 = 0.025;

/// Probability that a junk-row cell is left empty (counterplay gap).
pub const JUNK_GAP_RATE: f64 = 0.1;

/// Cell kinds - a closed variant so every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Letter,
    Junk,
    Wild,
    Bomb,
}

/// One grid position. Cells are plain values; board operations replace
/// them rather than mutating shared references, so older board snapshots
/// stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Resolved character for letter and junk cells; `None` otherwise.
    pub ch: Option<char>,
    /// Transient flag set between match detection and the clear pass.
    pub marked: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: CellKind::Empty,
        ch: None,
        marked: false,
    };

    pub fn letter(ch: char) -> Self {
        Cell {
            kind: CellKind::Letter,
            ch: Some(ch),
            marked: false,
        }
    }

    pub fn junk(ch: char) -> Self {
        Cell {
            kind: CellKind::Junk,
            ch: Some(ch),
            marked: false,
        }
    }

    pub fn wild() -> Self {
        Cell {
            kind: CellKind::Wild,
            ch: None,
            marked: false,
        }
    }

    pub fn bomb() -> Self {
        Cell {
            kind: CellKind::Bomb,
            ch: None,
            marked: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellKind::Empty
    }

    /// Letter-bearing cells participate in word scans. Wildcards count;
    /// bombs and empties break runs.
    pub fn bears_letter(&self) -> bool {
        matches!(self.kind, CellKind::Letter | CellKind::Junk | CellKind::Wild)
    }
}

/// Scan axis for word matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Discrete player inputs accepted by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
}

/// Per-match engine configuration. Board dimensions are compile-time
/// constants; only pacing and preview depth vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Base automatic drop interval at level 1.
    pub drop_speed_ms: u32,
    /// Grace period before a grounded piece commits to the board.
    pub lock_delay_ms: u32,
    /// Target length of the upcoming-shape queue.
    pub queue_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drop_speed_ms: BASE_DROP_MS,
            lock_delay_ms: LOCK_DELAY_MS,
            queue_size: QUEUE_SIZE,
        }
    }
}
