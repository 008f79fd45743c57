//! Snowball English stemming for matching inflected adjectives
//!
//! Both sides of a comparison go through the same stemmer, so stems only need
//! to agree with each other, not be real words.

use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// English Snowball stemmer working on lower-cased words
pub struct WordStemmer {
    stemmer: Stemmer,
}

impl WordStemmer {
    /// Create an English stemmer
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Stem a word, lower-casing it first
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    /// Whether two words share a stem
    pub fn same_stem(&self, a: &str, b: &str) -> bool {
        self.stem(a) == self.stem(b)
    }
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::new()
    }
}

// The stemmer holds no per-call state, so a fresh one is an exact copy.
impl Clone for WordStemmer {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStemmer")
            .field("algorithm", &"english")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_inflections() {
        let stemmer = WordStemmer::new();
        assert!(stemmer.same_stem("freezing", "freeze"));
        assert!(stemmer.same_stem("cooled", "cool"));
        assert!(stemmer.same_stem("warmly", "warm"));
        assert_eq!(stemmer.stem("hotness"), "hot");
    }

    #[test]
    fn test_comparatives_keep_their_suffix() {
        let stemmer = WordStemmer::new();
        assert!(!stemmer.same_stem("warmer", "warm"));
        assert!(!stemmer.same_stem("hotter", "hot"));
    }

    #[test]
    fn test_case_insensitive() {
        let stemmer = WordStemmer::new();
        assert_eq!(stemmer.stem("Hot"), "hot");
        assert!(stemmer.same_stem("COOL", "cool"));
    }

    #[test]
    fn test_base_adjectives_unchanged() {
        let stemmer = WordStemmer::new();
        for word in ["hot", "warm", "cool", "cold", "tepid"] {
            assert_eq!(stemmer.stem(word), word);
        }
    }

    #[test]
    fn test_different_words() {
        let stemmer = WordStemmer::new();
        assert!(!stemmer.same_stem("hot", "warm"));
        assert!(!stemmer.same_stem("cool", "cold"));
    }
}
