//! Scoring - word points, combo multiplier, attack sizing, drop pacing.

use crate::letters::word_score;
use letterfall_types::{DROP_INTERVAL_FLOOR_MS, DROP_SPEEDUP_PER_LEVEL_MS};

/// Factor applied when a word needed a wildcard to resolve.
const WILDCARD_FACTOR: f64 = 0.8;

/// Per-length bonus above the three-letter minimum.
const LENGTH_BONUS: u32 = 10;

/// Points for one cleared word.
///
/// `combo_level` is the 0-based cascade iteration the word cleared in;
/// each later iteration multiplies the base by another 1.5.
pub fn score_word(word: &str, combo_level: u32, has_wildcard: bool) -> u64 {
    let base = word_score(word) as f64;
    let length_bonus = (word.len().saturating_sub(3) as u32 * LENGTH_BONUS) as f64;
    let wildcard_factor = if has_wildcard { WILDCARD_FACTOR } else { 1.0 };
    let combo_multiplier = 1.5f64.powi(combo_level as i32);

    ((base + length_bonus) * wildcard_factor * combo_multiplier).floor() as u64
}

/// Rows of junk a cleared word sends to the opponent. The breakpoints are
/// deliberately coarse; game balance depends on them exactly.
pub fn attack_rows(word_length: usize) -> u32 {
    match word_length {
        0..=2 => 0,
        3..=4 => 1,
        5..=6 => 2,
        _ => 5,
    }
}

/// Automatic drop interval for a level: the base interval shrinks by 50ms
/// per level above 1, floored at 50ms.
pub fn drop_interval_ms(level: u32, base_ms: u32) -> u32 {
    base_ms
        .saturating_sub(level.saturating_sub(1) * DROP_SPEEDUP_PER_LEVEL_MS)
        .max(DROP_INTERVAL_FLOOR_MS)
}
