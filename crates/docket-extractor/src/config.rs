//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
///
/// All lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Characters of context kept before a case number
    pub window_before: usize,

    /// Characters of context kept after a case number
    pub window_after: usize,

    /// A labelled capture must be longer than this to be accepted
    pub min_capture_chars: usize,

    /// Maximum subject and ruling length on the primary path
    pub max_field_chars: usize,

    /// Maximum subject length for itemized blocks
    pub max_block_subject_chars: usize,

    /// Itemized blocks shorter than this are treated as noise
    pub min_block_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window_after == 0 {
            return Err("window_after must be greater than 0".to_string());
        }
        if self.max_field_chars == 0 {
            return Err("max_field_chars must be greater than 0".to_string());
        }
        if self.max_block_subject_chars == 0 {
            return Err("max_block_subject_chars must be greater than 0".to_string());
        }
        if self.min_capture_chars >= self.max_field_chars {
            return Err("min_capture_chars must be less than max_field_chars".to_string());
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            window_before: 200,
            window_after: 500,
            min_capture_chars: 10,
            max_field_chars: 200,
            max_block_subject_chars: 300,
            min_block_chars: 20,
        }
    }
}
