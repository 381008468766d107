//! Letter tables - frequency-weighted draws and per-letter point values.

use crate::rng::SplitMix64;

/// Natural-language letter frequencies scaled by 10 and rounded to
/// integers. Expanded into a flat pool so a uniform index is a weighted
/// draw.
pub const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('A', 81),
    ('B', 15),
    ('C', 28),
    ('D', 43),
    ('E', 120),
    ('F', 22),
    ('G', 20),
    ('H', 61),
    ('I', 70),
    ('J', 2),
    ('K', 8),
    ('L', 40),
    ('M', 24),
    ('N', 68),
    ('O', 75),
    ('P', 19),
    ('Q', 1),
    ('R', 60),
    ('S', 63),
    ('T', 91),
    ('U', 28),
    ('V', 10),
    ('W', 24),
    ('X', 2),
    ('Y', 20),
    ('Z', 1),
];

/// Scrabble-style point value for a letter. Unknown characters score 0.
pub fn letter_score(ch: char) -> u32 {
    match ch.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Sum of per-letter point values for a word.
pub fn word_score(word: &str) -> u32 {
    word.chars().map(letter_score).sum()
}

/// Flat pool expanded from [`LETTER_WEIGHTS`] for O(1) weighted draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    pool: Vec<char>,
}

impl LetterPool {
    pub fn new() -> Self {
        let mut pool = Vec::new();
        for &(ch, weight) in LETTER_WEIGHTS.iter() {
            for _ in 0..weight {
                pool.push(ch);
            }
        }
        Self { pool }
    }

    /// Frequency-weighted letter draw.
    pub fn draw(&self, rng: &mut SplitMix64) -> char {
        self.pool[rng.next_int(self.pool.len() as u32) as usize]
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_matches_weight_sum() {
        let expected: u32 = LETTER_WEIGHTS.iter().map(|&(_, w)| w).sum();
        assert_eq!(LetterPool::new().len(), expected as usize);
        assert_eq!(expected, 996);
    }

    #[test]
    fn test_letter_scores() {
        assert_eq!(letter_score('E'), 1);
        assert_eq!(letter_score('D'), 2);
        assert_eq!(letter_score('B'), 3);
        assert_eq!(letter_score('H'), 4);
        assert_eq!(letter_score('K'), 5);
        assert_eq!(letter_score('X'), 8);
        assert_eq!(letter_score('Q'), 10);
        assert_eq!(letter_score('?'), 0);
    }

    #[test]
    fn test_word_score_sums_letters() {
        // C=3, A=1, T=1
        assert_eq!(word_score("CAT"), 5);
        // Q=10, U=1, I=1, Z=10
        assert_eq!(word_score("QUIZ"), 22);
    }

    #[test]
    fn test_draw_is_deterministic() {
        let pool = LetterPool::new();
        let mut a = SplitMix64::new(5);
        let mut b = SplitMix64::new(5);
        for _ in 0..200 {
            assert_eq!(pool.draw(&mut a), pool.draw(&mut b));
        }
    }

    #[test]
    fn test_common_letters_dominate() {
        let pool = LetterPool::new();
        let mut rng = SplitMix64::new(11);
        let mut e_count = 0;
        let mut q_count = 0;
        for _ in 0..10_000 {
            match pool.draw(&mut rng) {
                'E' => e_count += 1,
                'Q' => q_count += 1,
                _ => {}
            }
        }
        assert!(e_count > q_count * 10);
    }
}
