//! Trait definitions for external collaborators
//!
//! The core never looks at definition text. Anything that turns a definition
//! fragment into weighted links satisfies [`RelationExtractor`] and can be
//! swapped in without touching the solver.

use crate::Word;

/// One link found in a definition fragment
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRelation {
    /// Word (or anchor) the fragment refers to
    pub target: Word,

    /// Magnitude of the relation before polarity is applied
    pub factor: f64,

    /// Whether the fragment negates the reference ("not hot")
    pub negated: bool,
}

impl ExtractedRelation {
    /// Create a non-negated relation
    pub fn new(target: impl Into<Word>, factor: f64) -> Self {
        Self {
            target: target.into(),
            factor,
            negated: false,
        }
    }

    /// Mark the relation as negated
    pub fn negated(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// The factor with polarity inversion applied
    pub fn signed_factor(&self) -> f64 {
        if self.negated {
            -self.factor
        } else {
            self.factor
        }
    }
}

/// Trait for turning definition text into relations
///
/// Implemented by the application layer (gradable-extractor)
pub trait RelationExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract zero or more relations from one definition fragment of `word`
    fn extract(&self, word: &Word, fragment: &str) -> Result<Vec<ExtractedRelation>, Self::Error>;
}
