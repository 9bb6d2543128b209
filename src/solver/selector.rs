//! Highest-scoring word selection

use std::fmt;

/// Error type for solver operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// There were no candidate words to choose from
    NoCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "no candidate words to choose from"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Select the highest-scoring word and its score
///
/// Ties go to the word that appears first. The returned reference points into `words`.
///
/// # Errors
/// Returns `SolverError::NoCandidates` if `words` is empty.
///
/// # Examples
/// ```
/// use scrapple::core::score;
/// use scrapple::solver::best_word;
///
/// let (best, points) = best_word(&["CAT", "QUIZ", "AXE"], score).unwrap();
/// assert_eq!(*best, "QUIZ");
/// assert_eq!(points, 22);
///
/// assert!(best_word::<&str, _>(&[], score).is_err());
/// ```
pub fn best_word<S, F>(words: &[S], score_fn: F) -> Result<(&S, u32), SolverError>
where
    S: AsRef<str>,
    F: Fn(&str) -> u32,
{
    let mut iter = words.iter();
    let first = iter.next().ok_or(SolverError::NoCandidates)?;

    // Strictly greater keeps the leftmost word on ties
    Ok(iter.fold((first, score_fn(first.as_ref())), |best, word| {
        let points = score_fn(word.as_ref());
        if points > best.1 { (word, points) } else { best }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{plain_score, score};

    #[test]
    fn picks_maximum() {
        let words = ["EAT", "BALL", "AXE"];
        assert_eq!(best_word(&words, score), Ok((&"BALL", 12)));
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let words = ["AB", "BA"];
        assert_eq!(best_word(&words, score), Ok((&"AB", 4)));
    }

    #[test]
    fn tie_later_in_list_keeps_earlier() {
        let words = ["CAT", "QI", "IQ", "ACT"];
        assert_eq!(best_word(&words, score), Ok((&"QI", 11)));
    }

    #[test]
    fn empty_input_is_an_error() {
        let words: Vec<String> = Vec::new();
        assert_eq!(best_word(&words, score), Err(SolverError::NoCandidates));
    }

    #[test]
    fn score_function_is_respected() {
        let words = ["BALL", "AXE"];
        assert_eq!(best_word(&words, score), Ok((&"BALL", 12)));
        assert_eq!(best_word(&words, plain_score), Ok((&"AXE", 10)));
    }

    #[test]
    fn single_word() {
        assert_eq!(best_word(&["Q"], score), Ok((&"Q", 10)));
    }
}
