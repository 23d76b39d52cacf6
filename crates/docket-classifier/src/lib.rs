//! Docket Record Classifier
//!
//! Assigns each raw record a taxonomy category, up to three subcategories
//! and a short description.
//!
//! # Strategies
//!
//! - `LexicalClassifier`: keyword scoring against the fixed taxonomy. Always
//!   available and deterministic.
//! - `ReasoningClassifier`: asks an external reasoning service and falls back
//!   to keyword scoring for any record it cannot classify.
//!
//! The strategy is chosen once by [`build_classifier`], depending on whether
//! the reasoning-service key is present in the environment.
//!
//! # Example Usage
//!
//! ```
//! use docket_classifier::LexicalClassifier;
//! use docket_domain::traits::RecordClassifier;
//! use docket_domain::RawRecord;
//!
//! let raw = RawRecord {
//!     number: "48500.123456/2024-01".to_string(),
//!     subject: "Reajuste".to_string(),
//!     ruling: None,
//!     full_text: "Reajuste da tarifa de energia".to_string(),
//! };
//!
//! let record = LexicalClassifier::new().classify(&raw);
//! assert_eq!(record.category, "Tarifas e Preços");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod lexical;
mod parser;
mod prompt;
mod reasoning;

#[cfg(test)]
mod proptests;

pub use config::{ClassifierConfig, DEFAULT_SYSTEM_PROMPT};
pub use error::ClassifierError;
pub use lexical::{describe, LexicalClassifier, MAX_DESCRIPTION_CHARS};
pub use parser::{parse_reply, ReasoningAnswer};
pub use prompt::PromptBuilder;
pub use reasoning::{ReasoningClassifier, MAX_SUBCATEGORIES};

use docket_domain::traits::RecordClassifier;
use docket_llm::{LlmError, OpenAiProvider};
use tracing::info;

/// Pick the classification strategy for this run
///
/// Uses the reasoning service when the key named by `api_key_env` is set,
/// keyword scoring otherwise.
///
/// # Errors
///
/// Returns `ClassifierError::Config` if the configuration is invalid or the
/// HTTP client cannot be built.
pub fn build_classifier(
    config: &ClassifierConfig,
) -> Result<Box<dyn RecordClassifier>, ClassifierError> {
    config.validate().map_err(ClassifierError::Config)?;

    let provider = match OpenAiProvider::from_env(&config.api_key_env) {
        Ok(provider) => provider,
        Err(LlmError::MissingCredential(var)) => {
            info!(env = %var, "No reasoning-service key, classifying by keywords");
            return Ok(Box::new(LexicalClassifier::new()));
        }
        Err(e) => return Err(ClassifierError::Config(e.to_string())),
    };

    let provider = provider
        .with_endpoint(config.endpoint.as_str())
        .with_model(config.model.as_str())
        .with_system_prompt(config.system_prompt.as_str())
        .with_temperature(config.temperature)
        .with_max_tokens(config.max_tokens)
        .with_timeout(config.timeout());

    info!(model = %provider.model(), "Classifying with reasoning service");
    Ok(Box::new(ReasoningClassifier::new(
        provider,
        config.prompt_text_chars,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_selects_lexical() {
        let config = ClassifierConfig {
            api_key_env: "DOCKET_TEST_UNSET_CLASSIFIER_KEY".to_string(),
            ..ClassifierConfig::default()
        };
        let classifier = build_classifier(&config).unwrap();
        assert_eq!(classifier.strategy(), "lexical");
    }

    #[test]
    fn test_present_key_selects_reasoning() {
        // Unique variable name so parallel tests do not interfere
        std::env::set_var("DOCKET_TEST_SET_CLASSIFIER_KEY", "sk-test");
        let config = ClassifierConfig {
            api_key_env: "DOCKET_TEST_SET_CLASSIFIER_KEY".to_string(),
            ..ClassifierConfig::default()
        };
        let classifier = build_classifier(&config).unwrap();
        assert_eq!(classifier.strategy(), "reasoning");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClassifierConfig {
            max_tokens: 0,
            ..ClassifierConfig::default()
        };
        assert!(matches!(
            build_classifier(&config),
            Err(ClassifierError::Config(_))
        ));
    }
}
