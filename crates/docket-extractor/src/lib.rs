//! Docket Extractor
//!
//! Converts flat agenda and minutes text into raw case records using ordered
//! pattern rules.
//!
//! # Overview
//!
//! Regulator documents cite cases by a canonical process number
//! (`48500.123456/2024-01`). Around each number the extractor reads a
//! context window and resolves a subject and a ruling by trying fixed rule
//! lists in order. Text without canonical numbers falls back to itemized
//! blocks (`Item`, `Processo`, `1.`, `2)` ...).
//!
//! # Architecture
//!
//! ```text
//! text → case numbers → context windows → subject/ruling rules → RawRecord
//!      ↘ (no numbers) → itemized blocks → RawRecord(Item-n)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use docket_extractor::TextWindowExtractor;
//!
//! let extractor = TextWindowExtractor::default_config().unwrap();
//! let records = extractor
//!     .extract_records("48500.123456/2024-01 Assunto: Revisão Tarifária da Empresa X.");
//!
//! assert_eq!(records[0].number, "48500.123456/2024-01");
//! assert_eq!(records[0].subject, "Revisão Tarifária da Empresa X");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod rules;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::TextWindowExtractor;
pub use rules::{PatternRule, GENERIC_SUBJECT};
