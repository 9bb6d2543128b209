//! Word list loading utilities
//!
//! Word files hold whitespace-delimited tokens: one per line, several per line, or any mix.
//! Tokens are uppercased; anything containing a non-letter is skipped.

use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrapple::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split text into normalized words, preserving order
///
/// # Examples
/// ```
/// use scrapple::wordlists::loader::words_from_str;
///
/// let words = words_from_str("eat zoo\n axe  x-ray\n");
/// assert_eq!(words, ["EAT", "ZOO", "AXE"]);
/// ```
#[must_use]
pub fn words_from_str(text: &str) -> Vec<String> {
    let mut skipped = 0usize;
    let words: Vec<String> = text
        .split_whitespace()
        .filter_map(|token| {
            let word = normalize(token);
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} word list tokens containing non-letters");
    }
    words
}

/// Convert an embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use scrapple::wordlists::WORDS;
/// use scrapple::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}

fn normalize(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
        None
    } else {
        Some(token.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_str_splits_on_any_whitespace() {
        let words = words_from_str("crane slate\nirate\t\tgrate\r\n");
        assert_eq!(words, ["CRANE", "SLATE", "IRATE", "GRATE"]);
    }

    #[test]
    fn words_from_str_skips_non_alphabetic() {
        let words = words_from_str("ok don't 42 fine");
        assert_eq!(words, ["OK", "FINE"]);
    }

    #[test]
    fn words_from_str_empty() {
        assert!(words_from_str("").is_empty());
        assert!(words_from_str("   \n ").is_empty());
    }

    #[test]
    fn words_from_slice_normalizes_case() {
        let words = words_from_slice(&["Ball", "zoo", "b4d"]);
        assert_eq!(words, ["BALL", "ZOO"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_tokens() {
        let path = std::env::temp_dir().join(format!("scrapple-words-{}.txt", std::process::id()));
        fs::write(&path, "alpha beta\ngamma\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["ALPHA", "BETA", "GAMMA"]);
    }
}
