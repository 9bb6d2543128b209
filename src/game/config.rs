//! Game configuration

use crate::core::HAND_CAPACITY;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Tiles per hand; also the longest word a player may submit
    pub hand_size: usize,
    /// Seed for the tile draws; `None` seeds from the operating system
    pub seed: Option<u64>,
    /// Reject player words that are not in the dictionary
    pub strict_dictionary: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand_size: HAND_CAPACITY,
            seed: None,
            strict_dictionary: false,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the random source described by this config
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.hand_size, 8);
        assert_eq!(config.seed, None);
        assert!(!config.strict_dictionary);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig::new().with_seed(77);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
