//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its
//! collaborators. Implementations live in other crates.

use crate::{RawAnnouncement, RawRecord, Record};
use std::fmt::Display;
use std::time::Duration;

/// Trait for the external reasoning service
///
/// Implemented by the infrastructure layer (docket-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: Display;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error>;
}

/// Raw response body plus the declared media type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchedPage {
    /// Undecoded body bytes
    pub body: Vec<u8>,
    /// `Content-Type` header value, when the server sent one
    pub content_type: Option<String>,
}

impl FetchedPage {
    /// Body with no declared media type
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            content_type: None,
        }
    }

    /// Attach a `Content-Type` header value
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Trait for blocking HTTP GET
///
/// Implemented by the infrastructure layer (docket-collector)
pub trait PageFetcher {
    /// Error type for fetch operations
    type Error: Display;

    /// Fetch the body at `url`, giving up after `timeout`
    ///
    /// The body is returned undecoded; callers pick the charset.
    fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, Self::Error>;
}

/// Trait for anything that yields raw announcements
///
/// Implemented by the collector (docket-collector)
pub trait AnnouncementSource {
    /// Collect relevant announcements from the first `pages` listing pages
    ///
    /// Never fails: unreadable pages are logged and skipped.
    fn collect(&self, pages: usize) -> Vec<RawAnnouncement>;
}

/// Trait for record classification strategies
///
/// Implemented by the application layer (docket-classifier)
pub trait RecordClassifier {
    /// Classify a raw record
    ///
    /// Never fails: the returned category is always a taxonomy member.
    fn classify(&self, record: &RawRecord) -> Record;

    /// Name of the strategy, for logging
    fn strategy(&self) -> &'static str;
}
