//! Docket LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `docket-domain`, used by
//! the reasoning classifier.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: Chat-completions API reached with an environment-supplied key
//!
//! # Examples
//!
//! ```
//! use docket_llm::MockProvider;
//! use docket_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"macrotema": "tarifas"}"#);
//! let result = provider.generate("test prompt").unwrap();
//! assert!(result.contains("tarifas"));
//! ```

#![warn(missing_docs)]

pub mod openai;

use docket_domain::traits::LlmProvider as LlmProviderTrait;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key in the environment
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Communication(format!("Request timed out: {}", e))
        } else if e.is_decode() {
            LlmError::InvalidResponse(e.to_string())
        } else {
            LlmError::Communication(e.to_string())
        }
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use docket_llm::MockProvider;
/// use docket_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Every call fails
/// let provider = MockProvider::failing("service down");
/// assert!(provider.generate("any prompt").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    failure: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            failure: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider whose every call fails with a communication error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            default_response: None,
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompt passed to the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.prompts).last().cloned()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        if let Some(message) = &self.failure {
            return Err(LlmError::Communication(message.clone()));
        }

        self.default_response
            .clone()
            .ok_or_else(|| LlmError::Other("No mock response configured".to_string()))
    }

    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }
}

/// Lock a mock's shared state, recovering from a poisoned mutex
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_records_prompts() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);
        assert!(provider.last_prompt().is_none());

        provider.generate("prompt1").unwrap();
        provider.generate_structured("prompt2", "{}").unwrap();
        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_prompt().as_deref(), Some("prompt2"));
    }

    #[test]
    fn test_mock_provider_failing() {
        let provider = MockProvider::failing("network unreachable");

        let result = provider.generate("anything");
        assert!(matches!(result, Err(LlmError::Communication(_))));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = LlmError::MissingCredential("OPENAI_API_KEY".to_string());
        assert_eq!(err.to_string(), "Missing credential: OPENAI_API_KEY is not set");
    }
}
