//! Equation table construction from definitions

use crate::config::ExtractorConfig;
use crate::ExtractorError;
use gradable_domain::{Relation, RelationExtractor, Word};
use gradable_store::DefinitionEntry;
use std::fmt::Display;
use tracing::{info, warn};

/// A fragment that could not be turned into relations
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionFailure {
    /// Word whose definition was being read
    pub word: Word,

    /// The fragment
    pub fragment: String,

    /// Reason for failure
    pub reason: String,
}

/// Output of [`EquationBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    /// Forward relations, each followed by its deduced reciprocal when enabled
    pub relations: Vec<Relation>,

    /// Number of fragments read
    pub fragments_processed: usize,

    /// Fragments that failed
    pub failures: Vec<ExtractionFailure>,

    /// Words none of whose fragments produced a relation
    pub unlinked: Vec<Word>,
}

impl BuildResult {
    /// Number of relations that were not deduced
    pub fn forward_count(&self) -> usize {
        self.relations.iter().filter(|r| !r.deduced).count()
    }
}

/// Runs a [`RelationExtractor`] over every definition fragment
pub struct EquationBuilder<E> {
    extractor: E,
    config: ExtractorConfig,
}

impl<E> EquationBuilder<E>
where
    E: RelationExtractor,
    E::Error: Display,
{
    /// Create a builder
    pub fn new(extractor: E, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { extractor, config })
    }

    /// The wrapped extractor
    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Build relations for every entry, in input order
    pub fn build(&self, entries: &[DefinitionEntry]) -> BuildResult {
        let mut result = BuildResult::default();

        for entry in entries {
            let before = result.relations.len();

            for fragment in &entry.fragments {
                result.fragments_processed += 1;

                let length = fragment.chars().count();
                if length > self.config.max_fragment_chars {
                    let error = ExtractorError::FragmentTooLong(length, self.config.max_fragment_chars);
                    self.record_failure(&mut result, entry, fragment, error.to_string());
                    continue;
                }

                let extracted = match self.extractor.extract(&entry.word, fragment) {
                    Ok(extracted) => extracted,
                    Err(e) => {
                        self.record_failure(&mut result, entry, fragment, e.to_string());
                        continue;
                    }
                };

                for link in extracted {
                    let relation = Relation::new(
                        entry.word.clone(),
                        link.target.clone(),
                        link.signed_factor(),
                        fragment.clone(),
                    );
                    if !relation.is_well_formed() {
                        warn!(
                            "Dropping {} -> {} with factor {} from '{}'",
                            relation.word, relation.variable, relation.factor, fragment
                        );
                        continue;
                    }

                    let reciprocal = if self.config.emit_deduced {
                        relation.reciprocal()
                    } else {
                        None
                    };
                    result.relations.push(relation);
                    result.relations.extend(reciprocal);
                }
            }

            if result.relations.len() == before {
                result.unlinked.push(entry.word.clone());
            }
        }

        info!(
            "Built {} relations from {} fragments of {} words ({} failed, {} unlinked)",
            result.relations.len(),
            result.fragments_processed,
            entries.len(),
            result.failures.len(),
            result.unlinked.len()
        );
        result
    }

    fn record_failure(
        &self,
        result: &mut BuildResult,
        entry: &DefinitionEntry,
        fragment: &str,
        reason: String,
    ) {
        warn!("Skipping fragment of '{}': {}", entry.word, reason);
        result.failures.push(ExtractionFailure {
            word: entry.word.clone(),
            fragment: fragment.to_string(),
            reason,
        });
    }
}
