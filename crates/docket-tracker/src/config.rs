//! Configuration for the Tracker

use docket_classifier::ClassifierConfig;
use docket_collector::CollectorConfig;
use docket_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the whole pipeline
///
/// Each stage keeps its own section; missing sections take their defaults.
///
/// ```toml
/// snapshot_path = "aneel_data.json"
/// initial_pages = 2
///
/// [collector]
/// page_timeout_secs = 10
///
/// [classifier]
/// model = "gpt-4o-mini"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where `refresh` writes and `ensure_loaded` reads the snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,

    /// Listing pages collected by `ensure_loaded` when no snapshot exists
    pub initial_pages: usize,

    /// Listing pages collected by a plain refresh
    pub default_pages: usize,

    /// Source collector settings
    pub collector: CollectorConfig,

    /// Extractor settings
    pub extractor: ExtractorConfig,

    /// Classifier settings
    pub classifier: ClassifierConfig,
}

impl TrackerConfig {
    /// Validate the configuration and every section
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_pages == 0 {
            return Err("initial_pages must be greater than 0".to_string());
        }
        if self.default_pages == 0 {
            return Err("default_pages must be greater than 0".to_string());
        }
        if let Some(path) = &self.snapshot_path {
            if path.as_os_str().is_empty() {
                return Err("snapshot_path must not be empty".to_string());
            }
        }

        self.collector
            .validate()
            .map_err(|e| format!("collector: {}", e))?;
        self.extractor
            .validate()
            .map_err(|e| format!("extractor: {}", e))?;
        self.classifier
            .validate()
            .map_err(|e| format!("classifier: {}", e))?;
        Ok(())
    }

    /// Use `path` for snapshots
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
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

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            initial_pages: 2,
            default_pages: 5,
            collector: CollectorConfig::default(),
            extractor: ExtractorConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_pages, 2);
        assert_eq!(config.default_pages, 5);
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    fn test_section_errors_are_prefixed() {
        let mut config = TrackerConfig::default();
        config.extractor.window_after = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("extractor:"));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let config = TrackerConfig {
            initial_pages: 0,
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nested_toml() {
        let config = TrackerConfig::from_toml(
            r#"
            snapshot_path = "/tmp/aneel_data.json"
            default_pages = 3

            [collector]
            page_timeout_secs = 4

            [classifier]
            model = "gpt-4o"
            "#,
        )
        .unwrap();

        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/aneel_data.json")));
        assert_eq!(config.default_pages, 3);
        assert_eq!(config.initial_pages, 2);
        assert_eq!(config.collector.page_timeout_secs, 4);
        assert_eq!(config.classifier.model, "gpt-4o");
        assert_eq!(config.extractor, ExtractorConfig::default());

        let round_trip = TrackerConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}
