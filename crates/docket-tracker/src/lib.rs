//! Docket Tracker
//!
//! Document pipeline and query surface for regulator agendas and minutes.
//! [`DocketTracker`] owns the in-memory document store: it pulls
//! announcements from a source, derives meeting metadata from each title,
//! extracts case records from the available text and classifies them.
//!
//! ## Pipeline
//!
//! ```text
//! collect ─▶ parse title ─▶ extract records ─▶ classify ─▶ append to store
//! ```
//!
//! Per-announcement failures are logged and skipped; the store only grows.
//! Queries, statistics and reports are pure functions of the store.
//!
//! # Example Usage
//!
//! ```no_run
//! use docket_tracker::{DocketTracker, RecordFilter, TrackerConfig};
//!
//! let config = TrackerConfig::default().with_snapshot_path("aneel_data.json");
//! let mut tracker = DocketTracker::new(config)?;
//!
//! tracker.ensure_loaded();
//! for hit in tracker.records(&RecordFilter::default().category("tarifas")) {
//!     println!("{} {}", hit.record.number, hit.record.subject);
//! }
//! # Ok::<(), docket_tracker::TrackerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod metadata;
pub mod query;
pub mod report;
pub mod snapshot;
pub mod tracker;

pub use config::TrackerConfig;
pub use error::TrackerError;
pub use metadata::{parse_title, MeetingMetadata};
pub use query::{RecordFilter, RecordHit, SearchField};
pub use report::{CategoryReport, Period, Report, Statistics, Totals};
pub use snapshot::Snapshot;
pub use tracker::{DocketTracker, Status};
