//! Letter-pool solving command
//!
//! Finds every dictionary word buildable from a set of letters and the highest-scoring one.

use crate::core::ScoreRule;
use crate::solver::Solver;
use crate::wordlists::Dictionary;

/// Fewest letters accepted by the solve command
pub const MIN_LETTERS: usize = 3;

/// Most letters accepted by the solve command
pub const MAX_LETTERS: usize = 12;

/// Configuration for solving a letter pool
pub struct SolveConfig {
    pub letters: String,
    pub rule: ScoreRule,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            rule: ScoreRule::DoubleLetterBonus,
        }
    }
}

/// Result of solving a letter pool
pub struct SolveResult {
    pub letters: String,
    pub matches: Vec<String>,
    pub best: Option<(String, u32)>,
    pub rule: ScoreRule,
}

/// Check that the letters are alphabetic and within the accepted length
///
/// # Errors
///
/// Returns a message describing what is wrong with the input.
pub fn validate_letters(letters: &str) -> Result<String, String> {
    let letters = letters.trim();
    if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("'{letters}' must contain only letters"));
    }
    let len = letters.len();
    if !(MIN_LETTERS..=MAX_LETTERS).contains(&len) {
        return Err(format!(
            "Enter {MIN_LETTERS} to {MAX_LETTERS} letters, got {len}"
        ));
    }
    Ok(letters.to_ascii_uppercase())
}

/// Solve a letter pool against the dictionary
///
/// # Errors
///
/// Returns an error if the letters fail [`validate_letters`].
pub fn solve_letters(config: SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, String> {
    let letters = validate_letters(&config.letters)?;
    let solver = Solver::new(dictionary).with_rule(config.rule);
    let solution = solver.solve(&letters).map_err(|e| e.to_string())?;

    Ok(SolveResult {
        letters,
        matches: solution.matches.iter().map(ToString::to_string).collect(),
        best: solution.best.map(|(w, s)| (w.to_string(), s)),
        rule: config.rule,
    })
}
