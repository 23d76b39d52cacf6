//! Error types for the Tracker

use thiserror::Error;

/// Errors surfaced by the tracker
///
/// Fetch, extraction and classification problems are logged and absorbed;
/// only configuration, query and persistence errors reach the caller.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Invalid configuration, unset snapshot path, client cannot be built
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query rejected before running
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Announcement could not be turned into a document
    #[error("Invalid announcement: {0}")]
    InvalidAnnouncement(String),

    /// Snapshot file could not be read or written
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Snapshot content is not valid JSON for the snapshot format
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(e: serde_json::Error) -> Self {
        TrackerError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(e: std::io::Error) -> Self {
        TrackerError::Snapshot(e.to_string())
    }
}

impl From<docket_collector::CollectorError> for TrackerError {
    fn from(e: docket_collector::CollectorError) -> Self {
        TrackerError::Config(e.to_string())
    }
}

impl From<docket_extractor::ExtractorError> for TrackerError {
    fn from(e: docket_extractor::ExtractorError) -> Self {
        TrackerError::Config(e.to_string())
    }
}

impl From<docket_classifier::ClassifierError> for TrackerError {
    fn from(e: docket_classifier::ClassifierError) -> Self {
        TrackerError::Config(e.to_string())
    }
}
