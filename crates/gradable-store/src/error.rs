//! Error types for file I/O

use thiserror::Error;

/// Errors that can occur while reading or writing pipeline files
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File parsed as CSV but violates the expected format
    #[error("Malformed input at line {line}: {reason}")]
    Malformed {
        /// 1-based line number (1 is the header)
        line: u64,
        /// What was wrong
        reason: String,
    },

    /// A variable would share its name with a fixed results column
    #[error("Word '{0}' clashes with a fixed results column")]
    ReservedColumn(String),
}
