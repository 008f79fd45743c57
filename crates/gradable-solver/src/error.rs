//! Error types for the solver

use thiserror::Error;

/// Errors that can occur while turning an equation table into a ranking
///
/// `MissingAnchor`, `NoEquations` and `Config` mean the input or settings are
/// wrong; `Computation` means the input was well-formed but the derived
/// system could not be solved.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The anchor word does not appear in the equation table
    #[error("Anchor '{0}' is not present in the equation table")]
    MissingAnchor(String),

    /// The variable list is empty
    #[error("No equations to solve")]
    NoEquations,

    /// The least-squares routine failed or produced non-finite values
    #[error("Computation error: {0}")]
    Computation(String),

    /// Invalid solver configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
