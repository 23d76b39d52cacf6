//! Configuration for the Classifier

use docket_llm::openai::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// System message sent to the reasoning service
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "Você é um especialista em regulação do setor elétrico brasileiro.";

/// Configuration for the Classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Environment variable holding the reasoning-service key
    pub api_key_env: String,

    /// Chat-completions endpoint
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// System message
    pub system_prompt: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Reply token limit
    pub max_tokens: u32,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Characters of record text included in the prompt
    pub prompt_text_chars: usize,
}

impl ClassifierConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.prompt_text_chars == 0 {
            return Err("prompt_text_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.3,
            max_tokens: 300,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            prompt_text_chars: 1500,
        }
    }
}
