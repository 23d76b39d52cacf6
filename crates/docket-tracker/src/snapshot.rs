//! JSON snapshot of the document store

use crate::error::TrackerError;
use chrono::NaiveDateTime;
use docket_domain::Document;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Flat-file form of the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was produced
    pub generated_at: NaiveDateTime,
    /// Number of documents (informational)
    pub total_documents: usize,
    /// Every document in store order
    pub documents: Vec<Document>,
}

impl Snapshot {
    /// Snapshot of `documents` taken at `generated_at`
    pub fn new(documents: Vec<Document>, generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at,
            total_documents: documents.len(),
            documents,
        }
    }

    /// Write pretty-printed JSON to `path`
    pub fn write(&self, path: &Path) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| {
            TrackerError::Config(format!("Cannot write snapshot to {}: {}", path.display(), e))
        })
    }

    /// Read a snapshot from `path`
    pub fn read(path: &Path) -> Result<Self, TrackerError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
