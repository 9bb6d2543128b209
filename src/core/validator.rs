//! Word validation against a hand
//!
//! A word is playable when its length is within bounds and every letter it uses is
//! available in the hand at least as many times as the word needs it.

use super::hand::Hand;
use super::letters::{LetterCounts, LetterError};
use std::fmt;

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 4;

/// Default number of tiles per hand, which is also the longest playable word
pub const HAND_CAPACITY: usize = 8;

/// Why a word cannot be played from a hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidWord {
    TooShort { len: usize, min: usize },
    TooLong { len: usize, max: usize },
    NonAlphabetic(char),
    MissingLetter(char),
}

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len, min } => {
                write!(f, "word has {len} letters, at least {min} are required")
            }
            Self::TooLong { len, max } => {
                write!(f, "word has {len} letters, at most {max} are allowed")
            }
            Self::NonAlphabetic(ch) => write!(f, "'{ch}' is not a letter"),
            Self::MissingLetter(ch) => write!(f, "not enough '{ch}' tiles in hand"),
        }
    }
}

impl std::error::Error for InvalidWord {}

impl From<LetterError> for InvalidWord {
    fn from(err: LetterError) -> Self {
        match err {
            LetterError::NonAlphabetic(ch) => Self::NonAlphabetic(ch),
        }
    }
}

/// Check a word against a hand, reporting the first reason it fails
///
/// The length bounds are [`MIN_WORD_LENGTH`] and the hand's capacity. Letters are compared
/// case-insensitively.
///
/// # Errors
/// Returns the `InvalidWord` reason when the word cannot be played.
pub fn check(word: &str, hand: &Hand) -> Result<LetterCounts, InvalidWord> {
    let len = word.chars().count();
    if len < MIN_WORD_LENGTH {
        return Err(InvalidWord::TooShort {
            len,
            min: MIN_WORD_LENGTH,
        });
    }
    let max = hand.capacity();
    if len > max {
        return Err(InvalidWord::TooLong { len, max });
    }

    let needed = LetterCounts::from_word(word)?;
    match hand.counts().first_shortfall(&needed) {
        Some(letter) => Err(InvalidWord::MissingLetter(char::from(letter))),
        None => Ok(needed),
    }
}

/// True if `word` can be played from `hand`
///
/// # Examples
/// ```
/// use scrapple::core::{Hand, is_valid};
///
/// let hand = Hand::from_letters("BALLOTEX");
/// assert!(is_valid("ball", &hand));
/// assert!(!is_valid("BALLS", &hand)); // no S
/// assert!(!is_valid("BAL", &hand)); // too short
/// ```
#[must_use]
pub fn is_valid(word: &str, hand: &Hand) -> bool {
    check(word, hand).is_ok()
}
