//! Dictionary matching against an arbitrary letter pool
//!
//! The pool is reduced to a 26-slot count once; every candidate is then checked by counting
//! its own letters and comparing slot by slot, so the pool itself is never consumed.

use crate::core::LetterCounts;

/// True if `word` can be built from the letters in `pool`
///
/// Words containing non-letters never match.
#[inline]
#[must_use]
pub fn can_build(word: &str, pool: &LetterCounts) -> bool {
    if word.len() > pool.len() {
        return false;
    }
    LetterCounts::from_word(word).is_ok_and(|needed| pool.contains(&needed))
}

/// Every dictionary word that can be built from `pool`, in dictionary order
///
/// There is no length restriction and `pool` is not modified.
///
/// # Examples
/// ```
/// use scrapple::core::LetterCounts;
/// use scrapple::solver::find_all;
///
/// let pool = LetterCounts::from_word("AEIOUXYZ").unwrap();
/// let dictionary = ["EAT", "ZOO", "AXE"];
/// assert_eq!(find_all(&pool, &dictionary), ["AXE"]);
/// ```
#[must_use]
pub fn find_all<'d, S: AsRef<str>>(pool: &LetterCounts, dictionary: &'d [S]) -> Vec<&'d str> {
    dictionary
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| can_build(word, pool))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(letters: &str) -> LetterCounts {
        LetterCounts::from_word(letters).unwrap()
    }

    #[test]
    fn finds_only_buildable_words() {
        let dictionary = ["EAT", "ZOO", "AXE"];
        assert_eq!(find_all(&pool("AEIOUXYZ"), &dictionary), ["AXE"]);
    }

    #[test]
    fn preserves_dictionary_order() {
        let dictionary = ["TEA", "EAT", "ATE", "TEE"];
        assert_eq!(find_all(&pool("TAE"), &dictionary), ["TEA", "EAT", "ATE"]);
    }

    #[test]
    fn duplicate_letters_need_duplicate_tiles() {
        let dictionary = ["ZOO", "ZO"];
        assert_eq!(find_all(&pool("ZO"), &dictionary), ["ZO"]);
        assert_eq!(find_all(&pool("OZO"), &dictionary), ["ZOO", "ZO"]);
    }

    #[test]
    fn empty_dictionary_gives_empty_result() {
        let dictionary: [&str; 0] = [];
        assert!(find_all(&pool("ABC"), &dictionary).is_empty());
    }

    #[test]
    fn empty_pool_matches_only_empty_words() {
        let dictionary = ["A", ""];
        assert_eq!(find_all(&LetterCounts::new(), &dictionary), [""]);
    }

    #[test]
    fn pool_is_not_consumed_between_candidates() {
        let letters = pool("CAT");
        let dictionary = ["CAT", "ACT", "TAC"];
        assert_eq!(find_all(&letters, &dictionary).len(), 3);
        assert_eq!(letters, pool("CAT"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let dictionary = ["cat", "Dog"];
        assert_eq!(find_all(&pool("tac"), &dictionary), ["cat"]);
    }

    #[test]
    fn non_letter_entries_never_match() {
        let dictionary = ["CA-T", "CAT"];
        assert_eq!(find_all(&pool("CATX"), &dictionary), ["CAT"]);
    }

    #[test]
    fn works_with_owned_strings() {
        let dictionary = vec!["AXE".to_string(), "OX".to_string()];
        assert_eq!(find_all(&pool("XEAO"), &dictionary), ["AXE", "OX"]);
    }
}
