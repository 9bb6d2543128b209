//! Letter multiset representation
//!
//! A `LetterCounts` stores how many of each letter A-Z a word, hand or pool holds.
//! Containment between two multisets is an element-wise comparison of the 26 slots.

use std::fmt;

/// Number of distinct letters tracked
pub const ALPHABET_LEN: usize = 26;

/// Map an ASCII letter (either case) to its slot index 0-25
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    match letter {
        b'A'..=b'Z' => Some((letter - b'A') as usize),
        b'a'..=b'z' => Some((letter - b'a') as usize),
        _ => None,
    }
}

/// Map a slot index 0-25 back to its uppercase letter
///
/// # Panics
/// Panics in debug builds if `index >= 26`
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_LEN);
    b'A' + index as u8
}

/// Error type for text that cannot be turned into a letter multiset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    /// The text contains a character outside A-Z / a-z
    NonAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAlphabetic(ch) => write!(f, "'{ch}' is not a letter"),
        }
    }
}

impl std::error::Error for LetterError {}

/// A multiset of letters stored as a 26-slot frequency count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [usize; ALPHABET_LEN],
    total: usize,
}

impl LetterCounts {
    /// The empty multiset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_LEN],
            total: 0,
        }
    }

    /// Build the multiset of letters in `text`, case-insensitively
    ///
    /// # Errors
    /// Returns `LetterError::NonAlphabetic` for the first character that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use scrapple::core::LetterCounts;
    ///
    /// let ball = LetterCounts::from_word("ball").unwrap();
    /// assert_eq!(ball.count(b'L'), 2);
    /// assert_eq!(ball.len(), 4);
    ///
    /// assert!(LetterCounts::from_word("b4ll").is_err());
    /// ```
    pub fn from_word(text: &str) -> Result<Self, LetterError> {
        let mut counts = Self::new();
        for ch in text.chars() {
            let index = u8::try_from(ch)
                .ok()
                .and_then(letter_index)
                .ok_or(LetterError::NonAlphabetic(ch))?;
            counts.counts[index] += 1;
            counts.total += 1;
        }
        Ok(counts)
    }

    /// Build the multiset from raw letter bytes, ignoring anything that is not a letter
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = Self::new();
        for &letter in letters {
            counts.add(letter);
        }
        counts
    }

    /// Count of a single letter (either case); zero for non-letters
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Total number of letters in the multiset
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Add one occurrence of `letter`. Returns `false` for non-letters.
    pub fn add(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(i) => {
                self.counts[i] += 1;
                self.total += 1;
                true
            }
            None => false,
        }
    }

    /// Remove one occurrence of `letter`. Returns `false` if none was present.
    pub fn remove(&mut self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// True if every letter of `other` appears here at least as many times
    ///
    /// # Examples
    /// ```
    /// use scrapple::core::LetterCounts;
    ///
    /// let hand = LetterCounts::from_word("BALLOTXE").unwrap();
    /// assert!(hand.contains(&LetterCounts::from_word("BALL").unwrap()));
    /// assert!(!hand.contains(&LetterCounts::from_word("BALLS").unwrap()));
    /// ```
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.total <= self.total
            && self
                .counts
                .iter()
                .zip(other.counts.iter())
                .all(|(have, need)| have >= need)
    }

    /// First letter (alphabetically) that `other` needs more of than is available here
    #[must_use]
    pub fn first_shortfall(&self, other: &Self) -> Option<u8> {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .position(|(have, need)| have < need)
            .map(index_letter)
    }

    /// Select the letter at position `nth` of the alphabetical expansion of this multiset
    ///
    /// With counts A=2, B=1 the expansion is "AAB", so `nth_letter(2)` is `B`.
    #[must_use]
    pub fn nth_letter(&self, mut nth: usize) -> Option<u8> {
        for (i, &count) in self.counts.iter().enumerate() {
            if nth < count {
                return Some(index_letter(i));
            }
            nth -= count;
        }
        None
    }

    /// Iterate the letters in alphabetical order, repeating duplicates
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(i, &count)| std::iter::repeat_n(index_letter(i), count))
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_maps_both_cases() {
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'z'), Some(25));
        assert_eq!(letter_index(b'1'), None);
        assert_eq!(index_letter(4), b'E');
    }

    #[test]
    fn from_word_counts_duplicates() {
        let counts = LetterCounts::from_word("Balloon").unwrap();
        assert_eq!(counts.count(b'B'), 1);
        assert_eq!(counts.count(b'l'), 2);
        assert_eq!(counts.count(b'O'), 2);
        assert_eq!(counts.count(b'Z'), 0);
        assert_eq!(counts.len(), 7);
    }

    #[test]
    fn from_word_rejects_non_letters() {
        assert_eq!(
            LetterCounts::from_word("ca t"),
            Err(LetterError::NonAlphabetic(' '))
        );
        assert_eq!(
            LetterCounts::from_word("café"),
            Err(LetterError::NonAlphabetic('é'))
        );
    }

    #[test]
    fn empty_word_is_empty_multiset() {
        let counts = LetterCounts::from_word("").unwrap();
        assert!(counts.is_empty());
        assert_eq!(counts, LetterCounts::new());
    }

    #[test]
    fn contains_respects_multiplicity() {
        let hand = LetterCounts::from_word("BALXTREO").unwrap();
        let ball = LetterCounts::from_word("BALL").unwrap();
        assert!(!hand.contains(&ball));

        let hand = LetterCounts::from_word("BALLTREO").unwrap();
        assert!(hand.contains(&ball));
    }

    #[test]
    fn everything_contains_empty() {
        let hand = LetterCounts::from_word("QZ").unwrap();
        assert!(hand.contains(&LetterCounts::new()));
        assert!(LetterCounts::new().contains(&LetterCounts::new()));
    }

    #[test]
    fn first_shortfall_names_missing_letter() {
        let hand = LetterCounts::from_word("BALT").unwrap();
        let ball = LetterCounts::from_word("BALL").unwrap();
        assert_eq!(hand.first_shortfall(&ball), Some(b'L'));
        assert_eq!(ball.first_shortfall(&ball), None);
    }

    #[test]
    fn add_and_remove_track_total() {
        let mut counts = LetterCounts::new();
        assert!(counts.add(b'q'));
        assert!(!counts.add(b'-'));
        assert_eq!(counts.len(), 1);
        assert!(counts.remove(b'Q'));
        assert!(!counts.remove(b'Q'));
        assert!(counts.is_empty());
    }

    #[test]
    fn nth_letter_walks_alphabetical_expansion() {
        let counts = LetterCounts::from_word("BAA").unwrap();
        assert_eq!(counts.nth_letter(0), Some(b'A'));
        assert_eq!(counts.nth_letter(1), Some(b'A'));
        assert_eq!(counts.nth_letter(2), Some(b'B'));
        assert_eq!(counts.nth_letter(3), None);
    }

    #[test]
    fn long_runs_of_one_letter_are_counted() {
        let word = "A".repeat(70_000);
        let counts = LetterCounts::from_word(&word).unwrap();
        assert_eq!(counts.count(b'A'), 70_000);
        assert_eq!(counts.len(), 70_000);

        let pool = LetterCounts::from_word(&"A".repeat(69_999)).unwrap();
        assert!(!pool.contains(&counts));
        assert_eq!(pool.first_shortfall(&counts), Some(b'A'));
    }

    #[test]
    fn display_is_sorted() {
        let counts = LetterCounts::from_word("zebra").unwrap();
        assert_eq!(counts.to_string(), "ABERZ");
    }
}
