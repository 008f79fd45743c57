//! Gradable Storage Layer
//!
//! Reads and writes the tabular files around the solver.
//!
//! # Files
//!
//! - **Equation table** (`Word,Variable,Factor,Definition,Deduced`): produced by
//!   the extractor, loaded whole into an [`EquationTable`](gradable_domain::EquationTable)
//! - **Definitions** (`Word` plus `... Definition` columns): input to the extractor
//! - **Results**: assembled matrix, right-hand side and ranking of one run
//!
//! Every write goes to a temporary file in the destination directory and is
//! renamed into place only when complete, so a failed run never leaves a
//! half-written file behind.
//!
//! # Examples
//!
//! ```no_run
//! use gradable_solver::{ScalePipeline, SolverConfig};
//! use gradable_store::{read_equations, write_results};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = read_equations("temperature_equations.csv", false)?;
//! let report = ScalePipeline::new(SolverConfig::default()).run(&table)?;
//! write_results("temperature_results.csv", &report)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod atomic;
mod definitions;
mod equations;
mod error;
mod results;

pub use definitions::{parse_definitions, read_definitions, split_fragments, DefinitionEntry, DEFINITION_COLUMNS};
pub use equations::{parse_equations, read_equations, write_equations, DEDUCED_MARKER, EQUATION_HEADERS};
pub use error::StoreError;
pub use results::{render_results, write_results, FIXED_RESULT_COLUMNS};
