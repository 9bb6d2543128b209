//! A player's hand of tiles

use super::letters::{LetterCounts, letter_index};
use super::pool::TilePool;
use super::validator::{self, HAND_CAPACITY, InvalidWord};
use log::debug;
use rand::Rng;
use std::fmt;

/// Error returned when a word cannot be played from a hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// The word failed validation
    Invalid(InvalidWord),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(reason) => write!(f, "invalid word: {reason}"),
        }
    }
}

impl std::error::Error for PlayError {}

impl From<InvalidWord> for PlayError {
    fn from(reason: InvalidWord) -> Self {
        Self::Invalid(reason)
    }
}

/// The tiles a player currently holds
///
/// Tiles are kept in the order they were drawn so the hand reads naturally on screen;
/// every rule only looks at the multiset of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<u8>,
    capacity: usize,
}

impl Hand {
    /// Deal a fresh hand by drawing `capacity` tiles from the pool
    pub fn deal<R: Rng + ?Sized>(pool: &mut TilePool, capacity: usize, rng: &mut R) -> Self {
        let tiles = pool.draw(capacity, rng);
        Self { tiles, capacity }
    }

    /// A hand holding the first [`HAND_CAPACITY`] letters of `letters`
    ///
    /// Letters are uppercased and anything else is dropped; letters past the capacity are
    /// ignored. Useful for tests and for setting up positions directly.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let tiles: Vec<u8> = letters
            .bytes()
            .filter(|&b| letter_index(b).is_some())
            .map(|b| b.to_ascii_uppercase())
            .take(HAND_CAPACITY)
            .collect();
        Self {
            tiles,
            capacity: HAND_CAPACITY,
        }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The hand as a letter multiset
    #[must_use]
    pub fn counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.tiles)
    }

    /// Play a word: validate it, remove its letters and refill from the pool
    ///
    /// Returns the number of tiles drawn during the refill. The refill comes up short
    /// when the pool runs out, which is not an error. If the word is invalid neither the
    /// hand nor the pool is touched.
    ///
    /// # Errors
    /// Returns `PlayError::Invalid` when the word fails [`validator::check`].
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        pool: &mut TilePool,
        rng: &mut R,
    ) -> Result<usize, PlayError> {
        validator::check(word, self)?;
        self.remove_word(word);
        Ok(self.refill(pool, rng))
    }

    /// Spend a word's letters without the length rules, then refill
    ///
    /// This is the automated opponent's path: its words are built from its own tiles so
    /// only containment is checked.
    ///
    /// # Errors
    /// Returns `PlayError::Invalid` when the hand does not hold the word's letters.
    pub fn spend<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        pool: &mut TilePool,
        rng: &mut R,
    ) -> Result<usize, PlayError> {
        let needed = LetterCounts::from_word(word).map_err(InvalidWord::from)?;
        if let Some(letter) = self.counts().first_shortfall(&needed) {
            return Err(InvalidWord::MissingLetter(char::from(letter)).into());
        }
        self.remove_word(word);
        Ok(self.refill(pool, rng))
    }

    /// Draw from the pool until the hand is at capacity or the pool is empty
    pub fn refill<R: Rng + ?Sized>(&mut self, pool: &mut TilePool, rng: &mut R) -> usize {
        let needed = self.capacity.saturating_sub(self.tiles.len());
        let drawn = pool.draw(needed, rng);
        let count = drawn.len();
        self.tiles.extend(drawn);
        count
    }

    /// Remove one tile per letter of `word`; caller has already checked containment
    fn remove_word(&mut self, word: &str) {
        for letter in word.bytes().map(|b| b.to_ascii_uppercase()) {
            if let Some(pos) = self.tiles.iter().position(|&t| t == letter) {
                self.tiles.remove(pos);
            }
        }
        debug!("removed '{word}' from hand, {} tiles left", self.tiles.len());
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{}", char::from(tile))?;
        }
        Ok(())
    }
}
