//! Word-match engine - scans rows and columns for dictionary words.
//!
//! Both axes are scanned on every call, so one board state can register
//! overlapping horizontal and vertical matches that share cells. Runs of
//! letter-bearing cells (letter, junk, wild) of length >= 3 are candidate
//! words; wildcards are resolved by backtracking search against the
//! dictionary, trying A-Z at the leftmost unresolved position first. The
//! first fully valid resolution wins - a deterministic tie-break, not a
//! score-optimal one. Unresolvable runs and runs too dense in wildcards
//! to search are discarded.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::dict::Dictionary;
use letterfall_types::{Axis, Cell, BOARD_HEIGHT, BOARD_WIDTH, MIN_WORD_LEN, WILDCARD_CHAR};

/// A dictionary word found on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// Resolved text (wildcards replaced by their chosen letters).
    pub word: String,
    /// Absolute (row, col) coordinates in scan order.
    pub cells: Vec<(usize, usize)>,
    pub axis: Axis,
    pub len: usize,
    pub has_wildcard: bool,
}

/// Scan the whole board, rows first then columns.
pub fn find_words(board: &Board, dict: &Dictionary) -> Vec<WordMatch> {
    let mut matches = Vec::new();

    for row in 0..BOARD_HEIGHT {
        scan_line(board.row(row), row, Axis::Row, dict, &mut matches);
    }

    for col in 0..BOARD_WIDTH {
        let mut line: ArrayVec<Cell, BOARD_HEIGHT> = ArrayVec::new();
        for row in 0..BOARD_HEIGHT {
            if let Some(cell) = board.get(row as i8, col as i8) {
                line.push(cell);
            }
        }
        scan_line(&line, col, Axis::Column, dict, &mut matches);
    }

    matches
}

/// Find maximal letter-bearing runs in one line and keep the ones that
/// resolve to dictionary words.
fn scan_line(line: &[Cell], index: usize, axis: Axis, dict: &Dictionary, out: &mut Vec<WordMatch>) {
    let mut run = String::new();
    let mut start = 0usize;
    let mut has_wildcard = false;

    for (pos, cell) in line.iter().enumerate() {
        if cell.bears_letter() {
            if run.is_empty() {
                start = pos;
                has_wildcard = false;
            }
            match cell.ch {
                Some(ch) => run.push(ch),
                None => {
                    // Wild cells carry no character until resolution.
                    run.push(WILDCARD_CHAR);
                    has_wildcard = true;
                }
            }
        } else {
            flush_run(&run, start, index, axis, has_wildcard, dict, out);
            run.clear();
        }
    }
    flush_run(&run, start, index, axis, has_wildcard, dict, out);
}

fn flush_run(
    run: &str,
    start: usize,
    index: usize,
    axis: Axis,
    has_wildcard: bool,
    dict: &Dictionary,
    out: &mut Vec<WordMatch>,
) {
    if run.len() < MIN_WORD_LEN {
        return;
    }
    let Some(word) = resolve_wildcards(run, dict) else {
        return;
    };
    if !dict.is_valid_word(&word) {
        return;
    }

    let cells = (0..run.len())
        .map(|i| match axis {
            Axis::Row => (index, start + i),
            Axis::Column => (start + i, index),
        })
        .collect();

    out.push(WordMatch {
        len: word.len(),
        word,
        cells,
        axis,
        has_wildcard,
    });
}

/// Upper bound on wildcards in one run. The backtracking search is
/// exponential in the wildcard count, so denser runs are discarded
/// outright rather than searched.
const MAX_WILDCARDS_PER_RUN: usize = 3;

/// Resolve wildcard positions against the dictionary. Text without
/// wildcards passes through unchecked; the caller validates membership.
/// Runs with more than [`MAX_WILDCARDS_PER_RUN`] wildcards never resolve.
pub fn resolve_wildcards(text: &str, dict: &Dictionary) -> Option<String> {
    let wildcards = text.chars().filter(|&ch| ch == WILDCARD_CHAR).count();
    if wildcards == 0 {
        return Some(text.to_string());
    }
    if wildcards > MAX_WILDCARDS_PER_RUN {
        return None;
    }
    let mut chars: Vec<char> = text.chars().collect();
    try_resolve(&mut chars, 0, dict)
}

/// Backtracking search: substitute A-Z at the next wildcard at or after
/// `from`, recursing until every wildcard is bound, and accept the first
/// candidate the dictionary contains.
fn try_resolve(chars: &mut [char], from: usize, dict: &Dictionary) -> Option<String> {
    let wildcard = chars[from..]
        .iter()
        .position(|&ch| ch == WILDCARD_CHAR)
        .map(|offset| from + offset);

    let Some(pos) = wildcard else {
        let word: String = chars.iter().collect();
        return dict.is_valid_word(&word).then_some(word);
    };

    for letter in b'A'..=b'Z' {
        chars[pos] = letter as char;
        if let Some(word) = try_resolve(chars, pos + 1, dict) {
            return Some(word);
        }
    }
    chars[pos] = WILDCARD_CHAR;
    None
}
