//! Gradable Domain Layer
//!
//! This crate contains the data model shared by every stage of the adjective
//! scaling pipeline. It has no external dependencies and defines the value
//! objects and collaborator traits the other crates build upon.
//!
//! ## Key Concepts
//!
//! - **Word**: Opaque identifier for an adjective or the anchor pseudo-word
//! - **Relation**: "word's intensity = factor × variable's intensity", mined from a definition
//! - **Equation table**: All non-deduced relations, grouped by word then variable
//! - **Anchor**: The pseudo-word pinned to a fixed intensity (the boundary condition)
//!
//! ## Architecture
//!
//! ```text
//! extractor → EquationTable → connectivity → assembler → least squares → ranking
//! ```
//!
//! Everything left of `EquationTable` is a pluggable collaborator behind
//! [`traits::RelationExtractor`]; everything right of it lives in `gradable-solver`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod relation;
pub mod table;
pub mod traits;
pub mod word;

// Re-exports for convenience
pub use relation::Relation;
pub use table::{EquationTable, InsertOutcome, TableStats};
pub use traits::{ExtractedRelation, RelationExtractor};
pub use word::Word;

/// Name of the pseudo-word standing for maximal intensity of the property
pub const DEFAULT_ANCHOR: &str = "high_prop";

/// Intensity the anchor is pinned to on the otherwise unitless scale
pub const DEFAULT_BOUNDARY_VALUE: f64 = 10.0;

/// Decimal digits kept when presenting solved scores
pub const DEFAULT_PRECISION: u32 = 2;
