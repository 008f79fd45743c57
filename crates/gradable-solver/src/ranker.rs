//! Ranker - solved intensities to an ordered scale

use crate::Solution;
use gradable_domain::Word;

/// One word on the final scale
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWord {
    /// The adjective (or anchor)
    pub word: Word,

    /// Solved intensity, rounded for presentation
    pub score: f64,
}

/// Words ordered by ascending score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedWord>,
}

impl Ranking {
    /// Ranked entries, lowest intensity first
    pub fn entries(&self) -> &[RankedWord] {
        &self.entries
    }

    /// Iterate over the ranked entries
    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord> {
        self.entries.iter()
    }

    /// Number of ranked words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ranking is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based rank of a word
    pub fn position(&self, word: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.word.as_str() == word)
    }

    /// Rounded score of a word
    pub fn score_of(&self, word: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.word.as_str() == word)
            .map(|e| e.score)
    }

    /// Words in rank order
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedWord;
    type IntoIter = std::slice::Iter<'a, RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Round half away from zero to `precision` decimals
///
/// Negative zero is normalized so `-0.001` presents as `0` rather than `-0`.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Pair each variable with its rounded score and sort ascending
///
/// The sort is stable, so words with equal rounded scores keep the variable
/// order (alphabetical).
pub fn rank(variables: &[Word], solution: &Solution, precision: u32) -> Ranking {
    let mut entries: Vec<RankedWord> = variables
        .iter()
        .zip(solution.values.iter())
        .map(|(word, value)| RankedWord {
            word: word.clone(),
            score: round_to(*value, precision),
        })
        .collect();

    entries.sort_by(|a, b| a.score.total_cmp(&b.score));

    Ranking { entries }
}
