//! Lexicon-driven relation extractor

use crate::lexicon::Lexicon;
use crate::stem::WordStemmer;
use crate::tokenize::tokenize;
use crate::ExtractorError;
use gradable_domain::{ExtractedRelation, RelationExtractor, Word, DEFAULT_ANCHOR};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Extracts relations by looking at the words around each token
///
/// Two kinds of reference are recognized in a fragment:
///
/// - **Property mentions** ("having a *high temperature*"): a relation to the
///   anchor, weighted by the polarity adjective directly in front of the
///   property word and by any intensifier or downtoner in front of that.
/// - **Candidate links** ("somewhat *hot*"): a relation to every other
///   candidate sharing the token's Snowball English stem, weighted by the modifier directly in
///   front of it. A negator in front of the modifier, or in front of the
///   token itself, flips the sign.
///
/// Tokens directly in front of a property word describe the property and are
/// never read as links.
#[derive(Debug, Clone)]
pub struct HeuristicExtractor<'a> {
    lexicon: &'a Lexicon,
    property_terms: BTreeSet<String>,
    anchor: Word,
    candidates: BTreeMap<String, Vec<Word>>,
    phrases: Vec<Vec<String>>,
    stemmer: WordStemmer,
}

impl<'a> HeuristicExtractor<'a> {
    /// Create an extractor for `property` over the given candidate words
    pub fn new(property: &str, candidates: &[Word], lexicon: &'a Lexicon) -> Self {
        let stemmer = WordStemmer::new();
        let mut by_stem: BTreeMap<String, Vec<Word>> = BTreeMap::new();
        for candidate in candidates {
            let group = by_stem.entry(stemmer.stem(candidate.as_str())).or_default();
            if !group.contains(candidate) {
                group.push(candidate.clone());
            }
        }

        Self {
            lexicon,
            property_terms: lexicon.property_terms(property),
            anchor: Word::from(DEFAULT_ANCHOR),
            candidates: by_stem,
            phrases: lexicon.phrases(),
            stemmer,
        }
    }

    /// Use a different anchor for property mentions
    pub fn with_anchor(mut self, anchor: impl Into<Word>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// The anchor property mentions point at
    pub fn anchor(&self) -> &Word {
        &self.anchor
    }

    fn is_property(&self, token: &str) -> bool {
        self.property_terms.contains(token)
    }

    /// Modifiers, negators and compounds carry no meaning of their own
    fn is_modifier(&self, token: &str) -> bool {
        self.lexicon.is_function_word(token) && self.lexicon.polarity(token).is_none()
    }

    fn property_factor(&self, tokens: &[String], i: usize) -> f64 {
        let polarity = match i.checked_sub(1).and_then(|j| self.lexicon.polarity(&tokens[j])) {
            Some(p) => p,
            None => return 1.0,
        };
        let weight = i
            .checked_sub(2)
            .and_then(|j| self.lexicon.modifier_weight(&tokens[j]))
            .unwrap_or(1.0);
        polarity * weight
    }

    fn link_factor(&self, tokens: &[String], i: usize) -> (f64, bool) {
        let before = |offset: usize| i.checked_sub(offset).map(|j| tokens[j].as_str());

        match before(1) {
            Some(prev) => {
                if let Some(weight) = self.lexicon.modifier_weight(prev) {
                    let negated = before(2).is_some_and(|t| self.lexicon.is_negator(t));
                    (weight, negated)
                } else {
                    (1.0, self.lexicon.is_negator(prev))
                }
            }
            None => (1.0, false),
        }
    }
}

impl RelationExtractor for HeuristicExtractor<'_> {
    type Error = ExtractorError;

    fn extract(&self, word: &Word, fragment: &str) -> Result<Vec<ExtractedRelation>, Self::Error> {
        let tokens = tokenize(fragment, &self.phrases);
        let mut relations = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if self.is_property(token) {
                relations.push(ExtractedRelation::new(
                    self.anchor.clone(),
                    self.property_factor(&tokens, i),
                ));
                continue;
            }

            if self.is_modifier(token) {
                continue;
            }
            if tokens.get(i + 1).is_some_and(|next| self.is_property(next)) {
                continue;
            }

            let Some(matches) = self.candidates.get(&self.stemmer.stem(token)) else {
                continue;
            };
            let (factor, negated) = self.link_factor(&tokens, i);
            for target in matches.iter().filter(|t| *t != word) {
                let relation = ExtractedRelation::new(target.clone(), factor);
                relations.push(if negated { relation.negated() } else { relation });
            }
        }

        debug!(
            "{}: {} relations from '{}'",
            word,
            relations.len(),
            fragment
        );
        Ok(relations)
    }
}
