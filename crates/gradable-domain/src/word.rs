//! Word identifiers

use std::borrow::Borrow;
use std::fmt;

/// An adjective or the anchor pseudo-word
///
/// Words are compared exactly (case-sensitive). Ordering is lexicographic on the
/// underlying string, which gives the alphabetical column order used by the
/// matrix assembler.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Create a word from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the word as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the word and return the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Word {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Word {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}
