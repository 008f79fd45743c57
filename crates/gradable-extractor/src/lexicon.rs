//! Lexicon - the word lists the heuristics consult
//!
//! Built once per run and passed by reference to whichever extractor needs
//! it. Nothing is cached globally.

use crate::ExtractorError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Weight of a strong intensifier ("very", "extremely")
pub const INTENSIFIER: f64 = 1.4;

/// Weight of a mild downtoner ("fairly", "rather")
pub const DOWNTONER: f64 = 0.8;

/// Weight of a strong downtoner ("somewhat", "slightly")
pub const STRONG_DOWNTONER: f64 = 0.6;

const INTENSIFIERS: &[&str] = &[
    "extremely", "intensely", "exceptionally", "astoundingly", "excessively", "totally",
    "absolutely", "completely", "oppressively", "incredibly", "remarkably", "particularly",
    "unusually", "amazingly", "unbearably", "utterly", "dangerously", "extraordinarily",
    "really", "very", "highly",
];

const DOWNTONERS: &[&str] = &["fairly", "pretty", "quite", "rather", "moderately"];

const STRONG_DOWNTONERS: &[&str] = &[
    "somewhat", "reasonably", "slightly", "a little", "mildly", "a bit", "pleasantly",
];

const HIGH: &[&str] = &["high", "good", "great", "higher", "better", "greater"];

const LOW: &[&str] = &["low", "bad", "little", "lower", "worse"];

const NEGATORS: &[&str] = &["not", "neither", "nor"];

/// Phrases read as one token so their parts don't fire on their own
/// ("not quite" is neither a negation nor a downtoner)
const COMPOUNDS: &[&str] = &["not quite"];

/// Word lists for intensity heuristics
///
/// Multi-word entries ("a little") are matched as a single token after the
/// tokenizer merges them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Adverbs that strengthen what follows, with their factor
    #[serde(default)]
    pub intensifiers: BTreeMap<String, f64>,

    /// Adverbs that weaken what follows, with their factor
    #[serde(default)]
    pub downtoners: BTreeMap<String, f64>,

    /// Adjectives that put the property high (+) or low (−)
    #[serde(default)]
    pub polarity: BTreeMap<String, f64>,

    /// Words that invert the polarity of what follows
    #[serde(default)]
    pub negators: BTreeSet<String>,

    /// Multi-word phrases kept together that carry no weight of their own
    #[serde(default)]
    pub compounds: BTreeSet<String>,

    /// Extra nouns standing for a property, keyed by property name
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
}

fn weighted(words: &'static [&'static str], weight: f64) -> impl Iterator<Item = (String, f64)> {
    words.iter().map(move |w| (w.to_string(), weight))
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            intensifiers: weighted(INTENSIFIERS, INTENSIFIER).collect(),
            downtoners: weighted(DOWNTONERS, DOWNTONER)
                .chain(weighted(STRONG_DOWNTONERS, STRONG_DOWNTONER))
                .collect(),
            polarity: weighted(HIGH, 1.0).chain(weighted(LOW, -1.0)).collect(),
            negators: NEGATORS.iter().map(|w| w.to_string()).collect(),
            compounds: COMPOUNDS.iter().map(|w| w.to_string()).collect(),
            synonyms: BTreeMap::new(),
        }
    }
}

/// Lexicon entries are stored with spaces; merged tokens use underscores
fn entry_key(token: &str) -> String {
    token.replace('_', " ")
}

impl Lexicon {
    /// Factor of an intensifier or downtoner token
    pub fn modifier_weight(&self, token: &str) -> Option<f64> {
        let key = entry_key(token);
        self.intensifiers
            .get(&key)
            .or_else(|| self.downtoners.get(&key))
            .copied()
    }

    /// Polarity of a high/low adjective token
    pub fn polarity(&self, token: &str) -> Option<f64> {
        self.polarity.get(&entry_key(token)).copied()
    }

    /// Whether the token negates what follows
    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(&entry_key(token))
    }

    /// Whether the token is one of the lexicon's function words
    pub fn is_function_word(&self, token: &str) -> bool {
        let key = entry_key(token);
        self.modifier_weight(token).is_some()
            || self.polarity(token).is_some()
            || self.is_negator(token)
            || self.compounds.contains(&key)
    }

    /// Multi-word entries as word sequences, for the tokenizer to merge
    pub fn phrases(&self) -> Vec<Vec<String>> {
        let mut phrases: BTreeSet<Vec<String>> = self
            .intensifiers
            .keys()
            .chain(self.downtoners.keys())
            .chain(self.polarity.keys())
            .chain(self.negators.iter())
            .chain(self.compounds.iter())
            .filter(|entry| entry.contains(' '))
            .map(|entry| entry.split_whitespace().map(str::to_string).collect())
            .collect();
        phrases.retain(|p: &Vec<String>| p.len() > 1);
        phrases.into_iter().collect()
    }

    /// The property name and its synonyms
    pub fn property_terms(&self, property: &str) -> BTreeSet<String> {
        let property = property.to_lowercase();
        let mut terms: BTreeSet<String> = self
            .synonyms
            .get(&property)
            .map(|s| s.iter().map(|t| t.to_lowercase()).collect())
            .unwrap_or_default();
        terms.insert(property);
        terms
    }

    /// Validate the lexicon
    ///
    /// Every weight must be finite and non-zero: a zero weight would produce
    /// relations that carry no information.
    pub fn validate(&self) -> Result<(), ExtractorError> {
        let weights = self
            .intensifiers
            .iter()
            .chain(self.downtoners.iter())
            .chain(self.polarity.iter());
        for (entry, weight) in weights {
            if !weight.is_finite() || *weight == 0.0 {
                return Err(ExtractorError::Lexicon(format!(
                    "weight for '{}' must be finite and non-zero (got {})",
                    entry, weight
                )));
            }
        }
        Ok(())
    }

    /// Load a lexicon from TOML string
    ///
    /// Sections that are left out stay empty; start from
    /// [`Lexicon::default`] and [`Lexicon::merge`] to extend the built-in lists.
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let lexicon: Lexicon = toml::from_str(toml_str)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Serialize the lexicon to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self).map_err(|e| ExtractorError::Lexicon(e.to_string()))
    }

    /// Add (or override) every entry of `other`
    pub fn merge(mut self, other: Lexicon) -> Self {
        self.intensifiers.extend(other.intensifiers);
        self.downtoners.extend(other.downtoners);
        self.polarity.extend(other.polarity);
        self.negators.extend(other.negators);
        self.compounds.extend(other.compounds);
        for (property, synonyms) in other.synonyms {
            self.synonyms.entry(property).or_default().extend(synonyms);
        }
        self
    }
}
