//! Scrabble-style word scoring
//!
//! A word's base score is the sum of its letter values. If any two adjacent letters are
//! identical (the "LL" in BALL) the base score is doubled, once, no matter how many such
//! pairs the word contains.

use super::letters::letter_index;

/// Point value of each letter A-Z
pub const LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Point value of a single letter (either case); zero for non-letters
#[inline]
#[must_use]
pub fn letter_score(letter: u8) -> u32 {
    letter_index(letter).map_or(0, |i| LETTER_SCORES[i])
}

/// Sum of letter values without the double-letter bonus
#[must_use]
pub fn plain_score(word: &str) -> u32 {
    word.bytes().map(letter_score).fold(0, u32::saturating_add)
}

/// True if the word has at least one pair of identical adjacent letters
///
/// Comparison is case-insensitive: "bAll" has a double L.
#[must_use]
pub fn has_double_letter(word: &str) -> bool {
    word.as_bytes()
        .windows(2)
        .any(|pair| pair[0].eq_ignore_ascii_case(&pair[1]))
}

/// Score a word with the double-letter bonus
///
/// # Examples
/// ```
/// use scrapple::core::score;
///
/// assert_eq!(score("BALL"), 12); // (3 + 1 + 1 + 1) * 2
/// assert_eq!(score("AABB"), 16); // two pairs still only double once
/// assert_eq!(score("CAT"), 5);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    let base = plain_score(word);
    if has_double_letter(word) {
        base.saturating_mul(2)
    } else {
        base
    }
}

/// Which scoring rule to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreRule {
    /// Letter sum, doubled once for adjacent identical letters
    #[default]
    DoubleLetterBonus,
    /// Letter sum only
    Plain,
}

impl ScoreRule {
    #[must_use]
    pub fn apply(self, word: &str) -> u32 {
        match self {
            Self::DoubleLetterBonus => score(word),
            Self::Plain => plain_score(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_table_values() {
        assert_eq!(letter_score(b'A'), 1);
        assert_eq!(letter_score(b'Q'), 10);
        assert_eq!(letter_score(b'z'), 10);
        assert_eq!(letter_score(b'J'), 8);
        assert_eq!(letter_score(b'?'), 0);
        assert_eq!(LETTER_SCORES.iter().sum::<u32>(), 87);
    }

    #[test]
    fn ball_doubles() {
        assert_eq!(plain_score("BALL"), 6);
        assert_eq!(score("BALL"), 12);
    }

    #[test]
    fn multiple_pairs_double_once() {
        assert_eq!(plain_score("AABB"), 8);
        assert_eq!(score("AABB"), 16);
        assert_eq!(score("BOOKKEEPER"), plain_score("BOOKKEEPER") * 2);
    }

    #[test]
    fn separated_repeats_do_not_double() {
        assert!(!has_double_letter("ABAB"));
        assert_eq!(score("ABAB"), 8);
    }

    #[test]
    fn non_letters_score_zero() {
        assert_eq!(score("A-B"), 4);
        assert_eq!(score(""), 0);
        assert_eq!(score("1"), 0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(score("ball"), score("BALL"));
        assert_eq!(score("bAlL"), 12);
    }

    #[test]
    fn single_letter_never_doubles() {
        assert_eq!(score("Q"), 10);
    }

    #[test]
    fn score_rule_dispatch() {
        assert_eq!(ScoreRule::default().apply("BALL"), 12);
        assert_eq!(ScoreRule::Plain.apply("BALL"), 6);
    }
}
