//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during relation extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Lexicon failed validation or could not be parsed
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Definition fragment exceeds maximum length
    #[error("Fragment too long: {0} chars (max: {1})")]
    FragmentTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Lexicon(e.to_string())
    }
}
