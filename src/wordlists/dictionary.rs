//! Ordered, read-only dictionary with fast membership checks

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// An ordered list of uppercase words plus a hash index for lookups
///
/// Order is the load order and is what the solver reports matches in.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-normalized words
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    /// Load a whitespace-delimited word file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership check
    ///
    /// # Examples
    /// ```
    /// use scrapple::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::new(vec!["BALL".to_string()]);
    /// assert!(dict.contains("ball"));
    /// assert!(!dict.contains("bell"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            self.index.contains(word)
        } else {
            self.index.contains(&word.to_ascii_uppercase())
        }
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        ["EAT", "ZOO", "AXE"].into_iter().map(String::from).collect()
    }

    #[test]
    fn preserves_order() {
        let dict = sample();
        assert_eq!(dict.words(), ["EAT", "ZOO", "AXE"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = sample();
        assert!(dict.contains("ZOO"));
        assert!(dict.contains("zoo"));
        assert!(dict.contains("Axe"));
        assert!(!dict.contains("TEA"));
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(!dict.contains("A"));
    }

    #[test]
    fn embedded_dictionary_has_common_words() {
        let dict = Dictionary::embedded();
        assert!(dict.contains("BALL"));
        assert!(dict.contains("zebra"));
        assert_eq!(dict.len(), WORDS.len());
    }
}
