//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] gradable_solver::SolverError),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] gradable_store::StoreError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extractor(#[from] gradable_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
