//! Word choice policies for the automated opponent
//!
//! Defines the `OpponentPolicy` trait and its implementations.

use super::engine::Solver;
use crate::core::Hand;
use log::debug;
use rand::Rng;

/// Shortest word the random-letters policy aims for
pub const RANDOM_MIN_LENGTH: usize = 4;

/// Longest word the random-letters policy aims for
pub const RANDOM_MAX_LENGTH: usize = 6;

/// A rule for picking the automated opponent's word from its hand
pub trait OpponentPolicy {
    /// Choose a word built from the hand's tiles
    ///
    /// The returned word only ever uses letters the hand holds.
    fn choose_word<R: Rng + ?Sized>(&self, hand: &Hand, rng: &mut R) -> String;
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of the policy while maintaining static dispatch.
pub enum PolicyType<'a> {
    /// Random letters from the hand (default)
    Random(RandomLetters),
    /// Best dictionary word, falling back to random letters
    Solver(SolverBacked<'a>),
}

impl OpponentPolicy for PolicyType<'_> {
    fn choose_word<R: Rng + ?Sized>(&self, hand: &Hand, rng: &mut R) -> String {
        match self {
            Self::Random(p) => p.choose_word(hand, rng),
            Self::Solver(p) => p.choose_word(hand, rng),
        }
    }
}

impl<'a> PolicyType<'a> {
    /// Create a policy from its name
    ///
    /// Supported names: "random", "solver". Defaults to random if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, solver: Solver<'a>) -> Self {
        match name {
            "solver" | "best" => Self::Solver(SolverBacked::new(solver)),
            _ => Self::Random(RandomLetters),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Solver(_) => "solver",
        }
    }
}

/// Random-letters policy
///
/// Picks a length uniformly in 4..=6 (clipped to the hand size) and draws that many tiles
/// from the hand without replacement. The result is not checked against any dictionary,
/// so it is usually not a real word.
pub struct RandomLetters;

impl OpponentPolicy for RandomLetters {
    fn choose_word<R: Rng + ?Sized>(&self, hand: &Hand, rng: &mut R) -> String {
        let length = rng
            .random_range(RANDOM_MIN_LENGTH..=RANDOM_MAX_LENGTH)
            .min(hand.len());

        let mut remaining = hand.tiles().to_vec();
        let mut word = String::with_capacity(length);
        for _ in 0..length {
            let index = rng.random_range(0..remaining.len());
            word.push(char::from(remaining.remove(index)));
        }
        word
    }
}

/// Solver-backed policy
///
/// Plays the highest-scoring dictionary word its hand allows, and falls back to
/// [`RandomLetters`] when there is none.
pub struct SolverBacked<'a> {
    solver: Solver<'a>,
}

impl<'a> SolverBacked<'a> {
    #[must_use]
    pub const fn new(solver: Solver<'a>) -> Self {
        Self { solver }
    }
}

impl OpponentPolicy for SolverBacked<'_> {
    fn choose_word<R: Rng + ?Sized>(&self, hand: &Hand, rng: &mut R) -> String {
        if let Some((word, points)) = self.solver.best_play(hand) {
            debug!("solver policy found {word} for {points} points");
            word.to_string()
        } else {
            debug!("solver policy found no word for {hand}, using random letters");
            RandomLetters.choose_word(hand, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterCounts;
    use crate::core::test_rng::ZeroRng;
    use crate::wordlists::Dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_letters_come_from_hand() {
        let hand = Hand::from_letters("QUIZBALL");
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            let word = RandomLetters.choose_word(&hand, &mut rng);
            assert!((4..=6).contains(&word.len()), "bad length for {word}");
            let used = LetterCounts::from_word(&word).unwrap();
            assert!(hand.counts().contains(&used), "{word} not in hand");
        }
    }

    #[test]
    fn random_letters_length_clipped_to_hand() {
        let hand = Hand::from_letters("AB");
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            assert_eq!(RandomLetters.choose_word(&hand, &mut rng).len(), 2);
        }
    }

    #[test]
    fn random_letters_empty_hand() {
        let hand = Hand::from_letters("");
        assert_eq!(RandomLetters.choose_word(&hand, &mut ZeroRng), "");
    }

    #[test]
    fn random_letters_with_zero_rng_is_deterministic() {
        // Shortest length, always the first remaining tile
        let hand = Hand::from_letters("TRAINERS");
        assert_eq!(RandomLetters.choose_word(&hand, &mut ZeroRng), "TRAI");
    }

    #[test]
    fn random_letters_uses_all_lengths() {
        let hand = Hand::from_letters("ABCDEFGH");
        let mut rng = StdRng::seed_from_u64(13);
        let mut seen = [false; 7];
        for _ in 0..300 {
            seen[RandomLetters.choose_word(&hand, &mut rng).len()] = true;
        }
        assert_eq!(seen[4..], [true, true, true]);
    }

    #[test]
    fn solver_policy_plays_best_word() {
        let dict: Dictionary = ["TRAIN", "RAIN", "TRAINERS"]
            .into_iter()
            .map(String::from)
            .collect();
        let policy = SolverBacked::new(Solver::new(&dict));
        let hand = Hand::from_letters("SRENIART");
        assert_eq!(policy.choose_word(&hand, &mut ZeroRng), "TRAINERS");
    }

    #[test]
    fn solver_policy_falls_back_to_random() {
        let dict = Dictionary::default();
        let policy = SolverBacked::new(Solver::new(&dict));
        let hand = Hand::from_letters("TRAINERS");
        assert_eq!(policy.choose_word(&hand, &mut ZeroRng), "TRAI");
    }

    #[test]
    fn policy_from_name() {
        let dict = Dictionary::default();
        assert_eq!(PolicyType::from_name("solver", Solver::new(&dict)).name(), "solver");
        assert_eq!(PolicyType::from_name("random", Solver::new(&dict)).name(), "random");
        assert_eq!(PolicyType::from_name("???", Solver::new(&dict)).name(), "random");
    }
}
