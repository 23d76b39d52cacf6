//! Blocking HTTP page fetcher

use crate::error::CollectorError;
use docket_domain::traits::{FetchedPage, PageFetcher};
use std::time::Duration;
use tracing::debug;

/// `PageFetcher` backed by a blocking reqwest client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a client that sends `user_agent` with every request
    pub fn new(user_agent: &str) -> Result<Self, CollectorError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| CollectorError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    type Error = CollectorError;

    fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, Self::Error> {
        debug!(url, timeout_secs = timeout.as_secs(), "GET");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(FetchedPage {
            body: response.bytes()?.to_vec(),
            content_type,
        })
    }
}
