//! Core domain types for Scrapple
//!
//! Tiles, hands, validation and scoring. Nothing here performs I/O; randomness is always
//! passed in by the caller.

mod hand;
mod letters;
mod pool;
mod score;
mod validator;

pub use hand::{Hand, PlayError};
pub use letters::{ALPHABET_LEN, LetterCounts, LetterError, index_letter, letter_index};
pub use pool::{STANDARD_TILES, TilePool};
pub use score::{LETTER_SCORES, ScoreRule, has_double_letter, letter_score, plain_score, score};
pub use validator::{HAND_CAPACITY, InvalidWord, MIN_WORD_LENGTH, check, is_valid};

#[cfg(test)]
pub(crate) use pool::test_rng;
