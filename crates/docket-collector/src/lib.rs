//! Docket Source Collector
//!
//! Fetches the regulator's paginated news listing and keeps the
//! announcements whose titles look like meeting agendas or minutes.
//!
//! # Architecture
//!
//! ```text
//! listing page → PageFetcher → charset decode → HTML → listing items → keyword filter → RawAnnouncement
//! ```
//!
//! A page that cannot be fetched is logged and skipped; collection carries
//! on with the next page.
//!
//! # Example Usage
//!
//! ```no_run
//! use docket_collector::{CollectorConfig, SourceCollector};
//! use docket_domain::traits::AnnouncementSource;
//!
//! let collector = SourceCollector::new(CollectorConfig::default())?;
//! for announcement in collector.collect(2) {
//!     println!("{}", announcement.title);
//! }
//! # Ok::<(), docket_collector::CollectorError>(())
//! ```

#![warn(missing_docs)]

mod charset;
mod collector;
mod config;
mod error;
mod fetcher;
pub mod listing;

pub use collector::SourceCollector;
pub use config::{CollectorConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::CollectorError;
pub use fetcher::HttpFetcher;
