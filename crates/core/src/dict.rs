//! Dictionary - uppercase word membership for match validation.
//!
//! The word set is an explicit value passed into the engine, never global
//! state, so tests can swap dictionaries freely. Sourcing a real word list
//! is the embedder's concern; a small built-in fallback keeps the engine
//! playable when none is supplied.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use letterfall_types::MIN_WORD_LEN;

/// Words shipped with the engine for when no external list loads.
const FALLBACK_WORDS: &[&str] = &[
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "OUT", "DAY", "GET", "HAS", "HIM", "HIS", "HOW", "ITS", "MAY", "NEW", "NOW", "OLD", "SEE",
    "TWO", "WAY", "WHO", "BOY", "DID", "LET", "PUT", "SAY", "SHE", "TOO", "USE", "MAN", "GOT",
    "BAD", "BIG", "CAT", "DOG", "EAR", "EYE", "FAR", "FUN", "GUN", "HAD", "JOB", "KEY", "LAW",
    "LOT", "MAP", "NET", "OIL", "PAN", "RED", "RUN", "SUN", "TAX", "TOP", "VAN", "WAR", "WIN",
    "YES", "ZOO", "ACE", "AGE", "ARM", "ART", "BAG", "BAR", "BAT", "BED", "BEE", "BOX", "BUS",
    "CAR", "COW", "CUP", "EGG", "END", "FAN", "FLY", "FOX", "GAS", "HAT", "ICE", "JAM", "JOY",
    "KID", "LEG", "LIP", "MOM", "MUD", "NUT", "PEN", "PIG", "RAT", "SEA", "SKY", "TEA", "TOY",
    "TREE", "WORD", "GAME", "PLAY", "TIME",
];

/// Flat set of uppercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build from any word source; entries are trimmed and uppercased.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let words = words
            .into_iter()
            .map(|w| w.trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// The built-in minimal word set.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_WORDS.iter().map(|w| w.to_string()))
    }

    /// Load a newline-delimited word list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open dictionary at {}", path.display()))?;
        let words = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("failed to read dictionary at {}", path.display()))?;
        Ok(Self::new(words))
    }

    /// A candidate qualifies iff it meets the minimum length and is a
    /// member of the set. Comparison is case-insensitive via uppercase.
    pub fn is_valid_word(&self, word: &str) -> bool {
        word.len() >= MIN_WORD_LEN && self.words.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_usable() {
        let dict = Dictionary::fallback();
        assert!(!dict.is_empty());
        assert!(dict.is_valid_word("CAT"));
        assert!(dict.is_valid_word("cat"));
        assert!(dict.is_valid_word("TREE"));
        assert!(!dict.is_valid_word("QXZ"));
    }

    #[test]
    fn test_minimum_length_is_enforced() {
        let dict = Dictionary::new(["AT".to_string(), "CAT".to_string()]);
        assert!(!dict.is_valid_word("AT"));
        assert!(dict.is_valid_word("CAT"));
    }

    #[test]
    fn test_entries_are_normalized() {
        let dict = Dictionary::new(["  dog \n".to_string(), "".to_string()]);
        assert_eq!(dict.len(), 1);
        assert!(dict.is_valid_word("DOG"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = Dictionary::load("/nonexistent/words.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
