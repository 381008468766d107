//! Deterministic word-forming falling-block engine.
//!
//! Everything in this crate is pure and seed-driven: given the same seed
//! and the same sequence of operations, two instances produce identical
//! states. That property is what makes lockstep peer-to-peer play work
//! without a server, and every module here is written to preserve it.

pub mod attacks;
pub mod board;
pub mod cascade;
pub mod dict;
pub mod game_state;
pub mod letters;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod words;

pub use attacks::{create_attack, process_attacks, Attack};
pub use board::Board;
pub use cascade::{process_cascades, CascadeResult, ClearedWord};
pub use dict::Dictionary;
pub use game_state::{GameEngine, GameState};
pub use letters::{letter_score, word_score, LetterPool};
pub use pieces::{Piece, PieceSource};
pub use rng::SplitMix64;
pub use scoring::{attack_rows, drop_interval_ms, score_word};
pub use shapes::{Shape, SHAPES};
pub use words::{find_words, resolve_wildcards, WordMatch};
