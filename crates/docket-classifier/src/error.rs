//! Error types for the Classifier

use thiserror::Error;

/// Errors raised inside the reasoning strategy
///
/// Never escape `classify`: any of these sends the record to lexical
/// scoring instead.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Reasoning service error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Reply did not contain a usable JSON object
    #[error("Invalid reply format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ClassifierError {
    fn from(e: serde_json::Error) -> Self {
        ClassifierError::JsonParse(e.to_string())
    }
}

impl From<docket_llm::LlmError> for ClassifierError {
    fn from(e: docket_llm::LlmError) -> Self {
        ClassifierError::Llm(e.to_string())
    }
}
