//! Cascade resolver - iterates match, clear, gravity to a fixed point.
//!
//! Clearing a word can drop letters into new words, so the loop repeats
//! until a scan finds nothing. A hard iteration cap keeps pathological
//! boards from spinning; hitting it is a silent truncation, not an error.

use log::warn;

use crate::board::Board;
use crate::dict::Dictionary;
use crate::words::find_words;
use letterfall_types::CASCADE_LIMIT;

/// One word removed during cascade resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedWord {
    pub word: String,
    /// 0-based cascade iteration the word cleared in; feeds the combo
    /// multiplier, so later iterations score progressively higher.
    pub cascade_index: u32,
    pub has_wildcard: bool,
}

/// Outcome of resolving one lock event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeResult {
    pub board: Board,
    /// Every cleared word across all iterations, in clear order.
    pub words: Vec<ClearedWord>,
    /// Total iterations that cleared at least one word.
    pub cascade_count: u32,
}

impl CascadeResult {
    /// Just the resolved texts, for the words-found log.
    pub fn words_cleared(&self) -> Vec<String> {
        self.words.iter().map(|w| w.word.clone()).collect()
    }
}

/// Repeatedly find matches, mark and clear their cells (shared cells are
/// marked once), and re-apply gravity until the board is quiet.
pub fn process_cascades(initial: Board, dict: &Dictionary) -> CascadeResult {
    let mut board = initial;
    let mut words = Vec::new();
    let mut cascade_count = 0u32;

    loop {
        let matches = find_words(&board, dict);
        if matches.is_empty() {
            break;
        }

        let mut cells: Vec<(usize, usize)> = Vec::new();
        for m in &matches {
            cells.extend_from_slice(&m.cells);
        }

        board = board.mark_cells(&cells).clear_marked().apply_gravity();

        for m in matches {
            words.push(ClearedWord {
                word: m.word,
                cascade_index: cascade_count,
                has_wildcard: m.has_wildcard,
            });
        }
        cascade_count += 1;

        if cascade_count >= CASCADE_LIMIT {
            warn!("cascade limit reached after {cascade_count} iterations; truncating");
            break;
        }
    }

    CascadeResult {
        board,
        words,
        cascade_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterfall_types::Cell;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| w.to_string()))
    }

    #[test]
    fn test_quiet_board_resolves_immediately() {
        let result = process_cascades(Board::new(), &dict(&["CAT"]));
        assert_eq!(result.cascade_count, 0);
        assert!(result.words.is_empty());
    }

    #[test]
    fn test_single_word_clears() {
        let board = Board::new().with_word(19, 0, "CAT");
        let result = process_cascades(board, &dict(&["CAT"]));

        assert_eq!(result.cascade_count, 1);
        assert_eq!(result.words_cleared(), vec!["CAT".to_string()]);
        assert_eq!(result.board.occupied_count(), 0);
    }

    #[test]
    fn test_chain_reaction_increments_cascade_index() {
        // Clearing "CAT" at the bottom drops the column of D, O, G one
        // row each... build the simpler stacked case: "CAT" on row 19
        // with D/O/G hovering above column 0 so gravity forms "DOG"
        // vertically after the clear. Vertical DOG occupies rows 17-19
        // only after CAT is gone.
        let board = Board::new()
            .with_word(19, 0, "CAT")
            .with_word(16, 0, "D")
            .with_word(17, 0, "O")
            .with_word(18, 0, "G");

        // Before the clear, column 0 reads D O G C top-down: no match.
        let result = process_cascades(board, &dict(&["CAT", "DOG"]));

        assert_eq!(result.cascade_count, 2);
        let words = result.words_cleared();
        assert_eq!(words, vec!["CAT".to_string(), "DOG".to_string()]);
        assert_eq!(result.words[0].cascade_index, 0);
        assert_eq!(result.words[1].cascade_index, 1);
        assert_eq!(result.board.occupied_count(), 0);
    }

    #[test]
    fn test_shared_cells_clear_once() {
        // CAT horizontal and CUP vertical share the C at (17, 0).
        let board = Board::new()
            .with_word(17, 0, "CAT")
            .with_word(18, 0, "U")
            .with_word(19, 0, "P");
        let result = process_cascades(board, &dict(&["CAT", "CUP"]));

        assert_eq!(result.words.len(), 2);
        assert_eq!(result.board.occupied_count(), 0);
    }

    #[test]
    fn test_cascade_never_exceeds_limit() {
        // A board full of A's matches words everywhere against a
        // permissive dictionary; the cap must bound the loop regardless.
        let mut board = Board::new();
        for row in 0..20 {
            for col in 0..10 {
                board = board.with_cell(row, col, Cell::letter('A'));
            }
        }
        // Every 3+ run of A's is a word.
        let d = Dictionary::new((3..=20).map(|n| "A".repeat(n)));

        let result = process_cascades(board, &d);
        assert!(result.cascade_count <= CASCADE_LIMIT);
        assert_eq!(result.board.occupied_count(), 0);
    }
}
