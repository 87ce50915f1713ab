//! Error types for the Analyzer

use prospect_llm::LlmError;
use thiserror::Error;

/// Errors that can stop an analysis before a result is produced
///
/// Malformed records inside a response are never errors; they are dropped
/// during extraction.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Product name was empty or whitespace
    #[error("Product name must not be empty")]
    EmptyProductName,

    /// Location was empty or whitespace
    #[error("Location must not be empty")]
    EmptyLocation,

    /// Provider has no usable API key
    #[error("Missing service credentials: {0}")]
    MissingCredentials(String),

    /// Provider returned blank text
    #[error("The text-generation service returned an empty response")]
    EmptyResponse,

    /// Provider or transport error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Generation did not finish in time
    #[error("Generation timeout after {0}s")]
    Timeout(u64),

    /// Response exceeds the configured maximum length
    #[error("Response too long: {0} chars (max: {1})")]
    ResponseTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for AnalyzerError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredentials(msg) => AnalyzerError::MissingCredentials(msg),
            other => AnalyzerError::Llm(other.to_string()),
        }
    }
}
