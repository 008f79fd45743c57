//! Gradable Solver
//!
//! Orders the adjectives of a scalar property (cold < cool < warm < hot) by
//! solving the linear system implied by their mined relations.
//!
//! # Overview
//!
//! Each relation `word = factor × variable` becomes one equation. The anchor
//! pseudo-word is pinned to a fixed intensity, everything else is solved by
//! least squares relative to it, and the words are sorted by the result.
//!
//! # Architecture
//!
//! ```text
//! EquationTable → connectivity → assembler → lstsq → ranker → ScaleReport
//! ```
//!
//! - [`connected_subset`]: BFS from the anchor over the undirected relation graph
//! - [`assemble`]: square `A·x = b`, one self-weight per equation, forced anchor row
//! - [`solve`]: SVD least squares with the anchor as a boundary condition
//! - [`rank`]: rounded scores, stable ascending sort
//!
//! # Example Usage
//!
//! ```
//! use gradable_domain::{EquationTable, Relation};
//! use gradable_solver::{ScalePipeline, SolverConfig};
//!
//! let table: EquationTable = vec![
//!     Relation::new("hot", "high_prop", 1.0, "having a high temperature"),
//!     Relation::new("warm", "hot", 0.6, "somewhat hot"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap();
//! assert_eq!(report.ranking.score_of("warm"), Some(6.0));
//! assert_eq!(report.anchor_score(), Some(10.0));
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
mod connectivity;
mod error;
mod lstsq;
mod pipeline;
mod ranker;

pub use assembler::{assemble, LinearSystem};
pub use config::{SolverConfig, VariableMode};
pub use connectivity::{connected_subset, select_variables};
pub use error::SolverError;
pub use lstsq::{solve, Solution};
pub use pipeline::{ScalePipeline, ScaleReport};
pub use ranker::{rank, round_to, RankedWord, Ranking};
