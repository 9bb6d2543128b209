//! Main Scrapple solver interface

use super::matcher::find_all;
use super::selector::best_word;
use crate::core::{Hand, LetterCounts, LetterError, MIN_WORD_LENGTH, ScoreRule};
use crate::wordlists::Dictionary;

/// Everything the solver found for one letter pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<'a> {
    /// Buildable words in dictionary order
    pub matches: Vec<&'a str>,
    /// Highest-scoring match, if there was any match at all
    pub best: Option<(&'a str, u32)>,
}

/// Dictionary solver
///
/// Combines matching, scoring and best-word selection over a borrowed dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    rule: ScoreRule,
}

impl<'a> Solver<'a> {
    /// Create a solver using the double-letter bonus scoring rule
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            rule: ScoreRule::DoubleLetterBonus,
        }
    }

    /// Use a different scoring rule
    #[must_use]
    pub const fn with_rule(mut self, rule: ScoreRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub const fn rule(&self) -> ScoreRule {
        self.rule
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Find every word buildable from `letters` and the best of them
    ///
    /// # Errors
    /// Returns `LetterError` if `letters` contains anything other than A-Z.
    ///
    /// # Examples
    /// ```
    /// use scrapple::solver::Solver;
    /// use scrapple::wordlists::Dictionary;
    ///
    /// let dict: Dictionary = ["EAT", "ZOO", "AXE"].into_iter().map(String::from).collect();
    /// let solution = Solver::new(&dict).solve("aeiouxyz").unwrap();
    /// assert_eq!(solution.matches, ["AXE"]);
    /// assert_eq!(solution.best, Some(("AXE", 10)));
    /// ```
    pub fn solve(&self, letters: &str) -> Result<Solution<'a>, LetterError> {
        let pool = LetterCounts::from_word(letters)?;
        let matches = find_all(&pool, self.dictionary.words());
        let rule = self.rule;
        let best = best_word(&matches, |w| rule.apply(w))
            .ok()
            .map(|(word, points)| (*word, points));
        Ok(Solution { matches, best })
    }

    /// Dictionary words a hand could legally play, in dictionary order
    #[must_use]
    pub fn playable(&self, hand: &Hand) -> Vec<&'a str> {
        let max = hand.capacity();
        find_all(&hand.counts(), self.dictionary.words())
            .into_iter()
            .filter(|w| (MIN_WORD_LENGTH..=max).contains(&w.len()))
            .collect()
    }

    /// Highest-scoring word a hand could legally play
    #[must_use]
    pub fn best_play(&self, hand: &Hand) -> Option<(&'a str, u32)> {
        let rule = self.rule;
        best_word(&self.playable(hand), |w| rule.apply(w))
            .ok()
            .map(|(word, points)| (*word, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_valid;

    fn dictionary() -> Dictionary {
        ["BALL", "ALL", "TALL", "BELT", "TABLE", "BALLET", "ZOO"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn solve_lists_matches_in_order() {
        let dict = dictionary();
        let solution = Solver::new(&dict).solve("ballet").unwrap();
        assert_eq!(
            solution.matches,
            ["BALL", "ALL", "TALL", "BELT", "TABLE", "BALLET"]
        );
        // BALLET = (3+1+1+1+1+1) * 2
        assert_eq!(solution.best, Some(("BALLET", 16)));
    }

    #[test]
    fn solve_without_matches_has_no_best() {
        let dict = dictionary();
        let solution = Solver::new(&dict).solve("qqq").unwrap();
        assert!(solution.matches.is_empty());
        assert_eq!(solution.best, None);
    }

    #[test]
    fn solve_rejects_non_letters() {
        let dict = dictionary();
        assert!(Solver::new(&dict).solve("ab1").is_err());
    }

    #[test]
    fn plain_rule_changes_best() {
        let dict = dictionary();
        let solver = Solver::new(&dict).with_rule(ScoreRule::Plain);
        let solution = solver.solve("ballet").unwrap();
        // BALLET loses its bonus but still leads TABLE by one point
        assert_eq!(solution.best, Some(("BALLET", 8)));
        assert_eq!(solver.rule(), ScoreRule::Plain);
    }

    #[test]
    fn playable_respects_length_rules() {
        let dict = dictionary();
        let hand = Hand::from_letters("BALLETXQ");
        let playable = Solver::new(&dict).playable(&hand);
        assert_eq!(playable, ["BALL", "TALL", "BELT", "TABLE", "BALLET"]);
        assert!(playable.iter().all(|w| is_valid(w, &hand)));
    }

    #[test]
    fn best_play_for_hand() {
        let dict = dictionary();
        let solver = Solver::new(&dict);
        assert_eq!(
            solver.best_play(&Hand::from_letters("BALLETXQ")),
            Some(("BALLET", 16))
        );
        assert_eq!(solver.best_play(&Hand::from_letters("XQXQXQXQ")), None);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        let solution = Solver::new(&dict).solve("abc").unwrap();
        assert!(solution.matches.is_empty());
        assert!(solution.best.is_none());
    }
}
