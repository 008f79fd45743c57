//! Gradable Extractor
//!
//! Turns dictionary definitions into the equation table the solver reads.
//!
//! # Overview
//!
//! Each candidate adjective comes with definition fragments from several
//! lexical sources. The extractor reads every fragment and records how the
//! adjective relates to the property ("having a *high temperature*") or to
//! another candidate ("*somewhat* hot", "*neither* warm *nor very* cold").
//!
//! # Architecture
//!
//! ```text
//! DefinitionEntry → tokenize → HeuristicExtractor → EquationBuilder → Vec<Relation>
//!                                    ↑
//!                                 Lexicon
//! ```
//!
//! [`HeuristicExtractor`] is one implementation of
//! [`RelationExtractor`](gradable_domain::RelationExtractor);
//! [`EquationBuilder`] accepts any other.
//!
//! # Example Usage
//!
//! ```
//! use gradable_domain::Word;
//! use gradable_extractor::{EquationBuilder, ExtractorConfig, HeuristicExtractor, Lexicon};
//! use gradable_store::DefinitionEntry;
//!
//! let entries = vec![
//!     DefinitionEntry { word: Word::from("hot"), fragments: vec!["having a high temperature".into()] },
//!     DefinitionEntry { word: Word::from("warm"), fragments: vec!["somewhat hot".into()] },
//! ];
//! let candidates: Vec<Word> = entries.iter().map(|e| e.word.clone()).collect();
//!
//! let lexicon = Lexicon::default();
//! let extractor = HeuristicExtractor::new("temperature", &candidates, &lexicon);
//! let builder = EquationBuilder::new(extractor, ExtractorConfig::default()).unwrap();
//!
//! let result = builder.build(&entries);
//! assert_eq!(result.forward_count(), 2);
//! assert_eq!(result.relations.len(), 4);
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod extractor;
mod lexicon;
mod stem;
mod tokenize;


pub use builder::{BuildResult, EquationBuilder, ExtractionFailure};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::HeuristicExtractor;
pub use lexicon::{Lexicon, DOWNTONER, INTENSIFIER, STRONG_DOWNTONER};
pub use stem::WordStemmer;
pub use tokenize::tokenize;
