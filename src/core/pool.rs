//! The shared pool of undrawn tiles

use super::letters::LetterCounts;
use log::debug;
use rand::Rng;

/// The standard 100-tile distribution
pub const STANDARD_TILES: &str = "AAAAAAAAAABBCCDDDDEEEEEEEEEEEEEFFGGGHHIIIIIIIII\
                                  JKLLLLMMNNNNNNOOOOOOOOPPQRRRRRRSSSSTTTTTTUUUUVVWWXYYZ";

/// Reservoir of letter tiles that players draw from without replacement
///
/// The pool only ever shrinks: tiles leave through [`TilePool::draw`] and never come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: LetterCounts,
}

impl TilePool {
    /// The standard 100-tile pool
    #[must_use]
    pub fn standard() -> Self {
        Self::from_letters(STANDARD_TILES)
    }

    /// A pool holding exactly the letters of `letters` (non-letters are ignored)
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Self {
            tiles: LetterCounts::from_letters(letters.as_bytes()),
        }
    }

    /// Number of tiles left
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Snapshot of the remaining tiles as a multiset
    #[must_use]
    pub const fn counts(&self) -> LetterCounts {
        self.tiles
    }

    /// Remaining tiles in alphabetical order
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.tiles.letters().collect()
    }

    /// Draw up to `n` tiles
    ///
    /// Every single draw picks uniformly over the tiles still in the pool, so letters with
    /// more copies are proportionally more likely. When fewer than `n` tiles remain, all of
    /// them are returned and the pool is left empty.
    ///
    /// # Examples
    /// ```
    /// use scrapple::core::TilePool;
    ///
    /// let mut pool = TilePool::from_letters("ABC");
    /// let drawn = pool.draw(5, &mut rand::rng());
    /// assert_eq!(drawn.len(), 3);
    /// assert!(pool.is_empty());
    /// ```
    pub fn draw<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<u8> {
        let take = n.min(self.size());
        let mut drawn = Vec::with_capacity(take);

        for _ in 0..take {
            let nth = rng.random_range(0..self.size());
            if let Some(letter) = self.tiles.nth_letter(nth) {
                self.tiles.remove(letter);
                drawn.push(letter);
            }
        }

        debug!(
            "drew {} of {} requested tiles, {} left in pool",
            drawn.len(),
            n,
            self.size()
        );
        drawn
    }
}

impl Default for TilePool {
    fn default() -> Self {
        Self::standard()
    }
}
