//! Attack scheduler - delayed junk-row injections between peers.
//!
//! A word clear on one board becomes junk rows on the other, but never
//! immediately: every attack is stamped one second into the future, a
//! grace window that lets the victim see it coming. Incoming attacks queue
//! here and drain once per tick, so remote mutations land at a single
//! consistent point in the frame.

use crate::scoring::attack_rows;
use letterfall_types::ATTACK_DELAY_MS;

/// A scheduled junk-row injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    /// Absolute time (ms) at which the attack becomes due.
    pub timestamp: u64,
    pub rows: u32,
    pub applied: bool,
}

/// Build an attack from a cleared word, due [`ATTACK_DELAY_MS`] after
/// `now_ms`.
pub fn create_attack(word_length: usize, now_ms: u64) -> Attack {
    Attack {
        timestamp: now_ms + ATTACK_DELAY_MS,
        rows: attack_rows(word_length),
        applied: false,
    }
}

/// Apply every due attack in queue order and return the rest.
///
/// An attack is due when its timestamp is at or before `now_ms`. Due
/// attacks invoke `apply` once each with their row count and are dropped
/// from the returned queue; attacks still in the future are kept.
pub fn process_attacks(
    queue: Vec<Attack>,
    now_ms: u64,
    mut apply: impl FnMut(u32),
) -> Vec<Attack> {
    let mut remaining = Vec::with_capacity(queue.len());
    for mut attack in queue {
        if !attack.applied && now_ms >= attack.timestamp {
            apply(attack.rows);
            attack.applied = true;
        }
        if !attack.applied {
            remaining.push(attack);
        }
    }
    remaining
}
