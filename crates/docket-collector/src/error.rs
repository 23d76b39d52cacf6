//! Error types for the Source Collector

use thiserror::Error;

/// Errors that can occur while collecting announcements
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Network failure or timeout
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("Unexpected status {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// A document could not be downloaded
    #[error("Failed to fetch {url}: {reason}")]
    Fetch {
        /// Requested URL
        url: String,
        /// Underlying failure
        reason: String,
    },

    /// Configuration error (invalid URL, client cannot be built)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CollectorError {
    fn from(e: reqwest::Error) -> Self {
        match (e.status(), e.url()) {
            (Some(status), Some(url)) => CollectorError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => CollectorError::Http(e.to_string()),
        }
    }
}

impl From<url::ParseError> for CollectorError {
    fn from(e: url::ParseError) -> Self {
        CollectorError::Config(format!("Invalid URL: {}", e))
    }
}
