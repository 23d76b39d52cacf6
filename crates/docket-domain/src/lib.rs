//! Docket Domain Layer
//!
//! Core data model and collaborator traits shared by every Docket crate.
//! Keeps dependencies to the two primitives the model cannot do without
//! (`chrono` for meeting dates, `serde` for the snapshot format).
//!
//! ## Key Concepts
//!
//! - **Announcement**: one published listing entry referencing an agenda or minutes document
//! - **Document**: a single meeting's agenda or minutes and its extracted case records
//! - **Record**: one regulatory case extracted from a document's text
//! - **Taxonomy**: fixed ordered set of categories with keywords and subcategories
//!
//! ## Architecture
//!
//! Infrastructure lives in other crates and plugs in through the traits in
//! [`traits`]: HTTP fetching, the external reasoning service, announcement
//! sources and record classifiers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod record;
pub mod taxonomy;
pub mod traits;

// Re-exports for convenience
pub use document::{
    Document, DocumentKind, DocumentSummary, MeetingType, RawAnnouncement,
    UNKNOWN_MEETING_NUMBER,
};
pub use record::{RawRecord, Record};
pub use taxonomy::{Category, TAXONOMY};
