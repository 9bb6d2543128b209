//! Score breakdown command
//!
//! Shows how a word's score is put together.

use crate::core::{LetterCounts, has_double_letter, letter_score, plain_score, score};
use crate::wordlists::Dictionary;

/// Per-letter breakdown of a word's score
pub struct ScoreBreakdown {
    pub word: String,
    pub letters: Vec<(char, u32)>,
    pub base: u32,
    pub bonus: bool,
    pub total: u32,
    pub in_dictionary: bool,
}

/// Break a word's score down letter by letter
///
/// # Errors
///
/// Returns an error if the word is empty or contains anything other than letters.
pub fn analyze_score(word: &str, dictionary: &Dictionary) -> Result<ScoreBreakdown, String> {
    let word = word.trim().to_ascii_uppercase();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }
    LetterCounts::from_word(&word).map_err(|e| format!("Invalid word: {e}"))?;

    let letters = word
        .bytes()
        .map(|b| (char::from(b), letter_score(b)))
        .collect();

    Ok(ScoreBreakdown {
        letters,
        base: plain_score(&word),
        bonus: has_double_letter(&word),
        total: score(&word),
        in_dictionary: dictionary.contains(&word),
        word,
    })
}
