//! Game engine - the per-player state machine.
//!
//! The engine owns the match configuration and dictionary; all mutable
//! state lives in `GameState` snapshots. Every operation takes a snapshot
//! by reference and returns a new one - illegal moves and operations on a
//! finished game hand back an unchanged copy, never an error. The engine
//! is externally clocked: callers drive it with `tick(state, delta_ms)`
//! and interleave discrete input calls between ticks.

use crate::board::Board;
use crate::cascade::process_cascades;
use crate::dict::Dictionary;
use crate::pieces::{Piece, PieceSource};
use crate::rng::SplitMix64;
use crate::scoring::{drop_interval_ms, score_word};
use crate::shapes::Shape;
use letterfall_types::{GameAction, GameConfig, LOCK_STEP_MS};

/// Per-player authoritative snapshot. Constructed by
/// [`GameEngine::new_game`] and advanced only through engine operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    queue: Vec<Shape>,
    score: u64,
    combo: u32,
    level: u32,
    words_cleared: u32,
    words_found: Vec<String>,
    over: bool,
    paused: bool,
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    rng: SplitMix64,
    source: PieceSource,
}

impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Upcoming shapes, nearest first. Previews carry no letters.
    pub fn queue(&self) -> &[Shape] {
        &self.queue
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Cascade depth of the last lock event that chained (0 otherwise).
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cumulative words cleared this match.
    pub fn words_cleared(&self) -> u32 {
        self.words_cleared
    }

    /// Every word cleared this match, in clear order.
    pub fn words_found(&self) -> &[String] {
        &self.words_found
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    /// Generator state snapshot, for replay verification.
    pub fn rng_state(&self) -> u64 {
        self.rng.state()
    }
}

/// The orchestrator: composes board physics, cascade resolution, scoring,
/// and piece generation. Holds no per-player state itself, so one engine
/// can drive any number of games.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    dictionary: Dictionary,
}

impl GameEngine {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            config: GameConfig::default(),
            dictionary,
        }
    }

    pub fn with_config(config: GameConfig, dictionary: Dictionary) -> Self {
        Self { config, dictionary }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Fresh match state from a seed: empty board, pre-generated shape
    /// queue, first piece spawned. Two engines given the same seed produce
    /// identical states forever under identical inputs.
    pub fn new_game(&self, seed: u64) -> GameState {
        let mut rng = SplitMix64::new(seed);
        let mut source = PieceSource::new(&mut rng);
        let mut queue = source.generate_queue(&mut rng, self.config.queue_size);

        let shape = queue.remove(0);
        let active = source.spawn_piece(shape, &mut rng);

        GameState {
            board: Board::new(),
            active: Some(active),
            queue,
            score: 0,
            combo: 0,
            level: 1,
            words_cleared: 0,
            words_found: Vec::new(),
            over: false,
            paused: false,
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            rng,
            source,
        }
    }

    /// Advance timers by `delta_ms` and perform the automatic drop when
    /// the interval elapses. No-op while paused, finished, or between
    /// pieces.
    pub fn tick(&self, state: &GameState, delta_ms: u32) -> GameState {
        if state.over || state.paused || state.active.is_none() {
            return state.clone();
        }

        let mut next = state.clone();
        next.drop_timer_ms += delta_ms;

        let interval = drop_interval_ms(next.level, self.config.drop_speed_ms);
        if next.drop_timer_ms >= interval {
            next = self.move_down(&next);
            next.drop_timer_ms = 0;
        }
        next
    }

    pub fn move_left(&self, state: &GameState) -> GameState {
        self.shift(state, -1)
    }

    pub fn move_right(&self, state: &GameState) -> GameState {
        self.shift(state, 1)
    }

    fn shift(&self, state: &GameState, dx: i8) -> GameState {
        if state.over || state.paused {
            return state.clone();
        }
        let Some(active) = state.active.as_ref() else {
            return state.clone();
        };
        let legal = if dx < 0 {
            state.board.can_move_left(active)
        } else {
            state.board.can_move_right(active)
        };
        if !legal {
            return state.clone();
        }

        let mut next = state.clone();
        if let Some(piece) = next.active.as_mut() {
            piece.col += dx;
        }
        // Any successful lateral move cancels a pending lock.
        next.lock_timer_ms = 0;
        next
    }

    /// Advance the rotation index mod 4. No wall kicks: a rotation that
    /// would collide is rejected outright.
    pub fn rotate(&self, state: &GameState) -> GameState {
        if state.over || state.paused {
            return state.clone();
        }
        let Some(active) = state.active.as_ref() else {
            return state.clone();
        };
        if !state.board.can_rotate(active) {
            return state.clone();
        }

        let mut next = state.clone();
        if let Some(piece) = next.active.as_mut() {
            piece.rot = (piece.rot + 1) % 4;
        }
        next.lock_timer_ms = 0;
        next
    }

    /// Soft drop: move down one row if free, otherwise advance the lock
    /// timer, resolving the lock once the delay elapses.
    pub fn move_down(&self, state: &GameState) -> GameState {
        if state.over || state.paused {
            return state.clone();
        }
        let Some(active) = state.active.as_ref() else {
            return state.clone();
        };

        if state.board.can_move_down(active) {
            let mut next = state.clone();
            if let Some(piece) = next.active.as_mut() {
                piece.row += 1;
            }
            next.lock_timer_ms = 0;
            return next;
        }

        if state.lock_timer_ms >= self.config.lock_delay_ms {
            return self.lock_piece(state);
        }

        let mut next = state.clone();
        next.lock_timer_ms += LOCK_STEP_MS;
        next
    }

    /// Project the piece to its lowest legal row and lock immediately.
    pub fn hard_drop(&self, state: &GameState) -> GameState {
        if state.over || state.paused {
            return state.clone();
        }
        let Some(active) = state.active.as_ref() else {
            return state.clone();
        };

        let drop_row = state.board.hard_drop_row(active);
        let mut next = state.clone();
        if let Some(piece) = next.active.as_mut() {
            piece.row = drop_row;
        }
        self.lock_piece(&next)
    }

    pub fn toggle_pause(&self, state: &GameState) -> GameState {
        if state.over {
            return state.clone();
        }
        let mut next = state.clone();
        next.paused = !next.paused;
        next
    }

    /// Dispatch a discrete input.
    pub fn apply_action(&self, state: &GameState, action: GameAction) -> GameState {
        match action {
            GameAction::MoveLeft => self.move_left(state),
            GameAction::MoveRight => self.move_right(state),
            GameAction::Rotate => self.rotate(state),
            GameAction::SoftDrop => self.move_down(state),
            GameAction::HardDrop => self.hard_drop(state),
            GameAction::Pause => self.toggle_pause(state),
        }
    }

    /// Inject junk rows from an opponent attack. Consumes the state's own
    /// generator so the injection is deterministic per-seed.
    pub fn add_junk_rows(&self, state: &GameState, rows: u32) -> GameState {
        if rows == 0 || state.over {
            return state.clone();
        }
        let mut next = state.clone();
        next.board = next.board.add_junk_rows(rows, &mut next.rng);
        next
    }

    /// Lock resolution: place the piece, run the cascade, score every
    /// cleared word by its cascade iteration, advance the level, and spawn
    /// the next piece - or end the game when the spawn area is blocked or
    /// the queue is exhausted.
    fn lock_piece(&self, state: &GameState) -> GameState {
        let Some(active) = state.active.as_ref() else {
            return state.clone();
        };

        let mut next = state.clone();
        let placed = next.board.place(active);
        let result = process_cascades(placed, &self.dictionary);

        for cleared in &result.words {
            next.score += score_word(&cleared.word, cleared.cascade_index, cleared.has_wildcard);
            next.words_found.push(cleared.word.clone());
        }
        next.words_cleared += result.words.len() as u32;
        next.level = next.words_cleared / 10 + 1;
        next.combo = if result.cascade_count > 1 {
            result.cascade_count
        } else {
            0
        };
        next.board = result.board;

        while next.queue.len() < self.config.queue_size {
            let shape = next.source.next_shape(&mut next.rng);
            next.queue.push(shape);
        }

        if next.queue.is_empty() || !next.board.has_spawn_room() {
            next.active = None;
            next.over = true;
        } else {
            let shape = next.queue.remove(0);
            next.active = Some(next.source.spawn_piece(shape, &mut next.rng));
        }

        next.lock_timer_ms = 0;
        next.drop_timer_ms = 0;
        next
    }
}
