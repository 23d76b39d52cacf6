//! The document pipeline

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::metadata;
use crate::query::{self, RecordFilter, RecordHit, SearchField};
use crate::report::{self, Report, Statistics};
use crate::snapshot::Snapshot;
use chrono::{Local, NaiveDate};
use docket_classifier::build_classifier;
use docket_collector::SourceCollector;
use docket_domain::traits::{AnnouncementSource, RecordClassifier};
use docket_domain::{Document, DocumentKind, RawAnnouncement, Record};
use docket_extractor::TextWindowExtractor;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Whether the store has been populated, plus its statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    /// `ensure_loaded`, `refresh` or a snapshot restore has run
    pub loaded: bool,
    /// Store statistics
    pub statistics: Statistics,
}

/// Owns the document store and runs collect → extract → classify
///
/// The store is append-only: every `update` adds one document per collected
/// announcement, with no deduplication across runs.
pub struct DocketTracker {
    source: Box<dyn AnnouncementSource>,
    extractor: TextWindowExtractor,
    classifier: Box<dyn RecordClassifier>,
    documents: Vec<Document>,
    loaded: bool,
    config: TrackerConfig,
}

impl DocketTracker {
    /// Create a tracker that collects over HTTP
    ///
    /// The classification strategy is fixed here: reasoning service when its
    /// key is in the environment, keywords otherwise.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Config` if the configuration is invalid or a
    /// client cannot be built.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate().map_err(TrackerError::Config)?;

        let source = SourceCollector::new(config.collector.clone())?;
        let classifier = build_classifier(&config.classifier)?;
        Self::with_parts(Box::new(source), classifier, config)
    }

    /// Create a tracker from explicit collaborators
    pub fn with_parts(
        source: Box<dyn AnnouncementSource>,
        classifier: Box<dyn RecordClassifier>,
        config: TrackerConfig,
    ) -> Result<Self, TrackerError> {
        config.validate().map_err(TrackerError::Config)?;
        let extractor = TextWindowExtractor::new(config.extractor.clone())?;

        info!(strategy = classifier.strategy(), "Tracker ready");
        Ok(Self {
            source,
            extractor,
            classifier,
            documents: Vec::new(),
            loaded: false,
            config,
        })
    }

    /// Tracker configuration
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Active classification strategy
    pub fn strategy(&self) -> &'static str {
        self.classifier.strategy()
    }

    /// Every document, in insertion order
    pub fn all_documents(&self) -> &[Document] {
        &self.documents
    }

    /// Whether the store has been populated
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Collect `pages` listing pages and append one document per announcement
    ///
    /// Returns the cumulative document count. Announcements that cannot be
    /// processed are logged and skipped.
    pub fn update(&mut self, pages: usize) -> usize {
        info!(pages, "Collecting agendas and minutes");
        let announcements = self.source.collect(pages);
        info!(count = announcements.len(), "Announcements found");

        for announcement in &announcements {
            match self.process(announcement) {
                Ok(document) => {
                    debug!(
                        kind = %document.kind,
                        meeting = %document.meeting_number,
                        records = document.records.len(),
                        "Document processed"
                    );
                    self.documents.push(document);
                }
                Err(e) => {
                    error!(
                        title = %announcement.title,
                        url = announcement.url.as_deref().unwrap_or(""),
                        error = %e,
                        "Skipping announcement"
                    );
                }
            }
        }

        info!(total = self.documents.len(), "Documents in store");
        self.documents.len()
    }

    /// Turn one announcement into a document
    pub fn process(&self, announcement: &RawAnnouncement) -> Result<Document, TrackerError> {
        let title = announcement.title.trim();
        if title.is_empty() {
            return Err(TrackerError::InvalidAnnouncement("title is empty".to_string()));
        }

        let meeting = metadata::parse_title(title, Local::now().naive_local());

        // Only the title is available until full documents are downloaded
        let records: Vec<Record> = self
            .extractor
            .extract_records(title)
            .iter()
            .map(|raw| self.classifier.classify(raw))
            .collect();

        Ok(Document {
            kind: meeting.kind,
            date: meeting.date,
            meeting_number: meeting.meeting_number,
            meeting_type: meeting.meeting_type,
            url: announcement.url.clone().unwrap_or_default(),
            records,
            publication_date: announcement.publication_date,
        })
    }

    /// Populate the store once
    ///
    /// Restores the configured snapshot when it exists and reads cleanly,
    /// otherwise collects `initial_pages` pages. Later calls do nothing.
    pub fn ensure_loaded(&mut self) -> usize {
        if self.loaded {
            return self.documents.len();
        }

        if let Some(path) = self.config.snapshot_path.clone() {
            if path.exists() {
                match self.load_snapshot(&path) {
                    Ok(count) => {
                        info!(path = %path.display(), count, "Store restored from snapshot");
                        return self.documents.len();
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Snapshot unreadable, collecting instead");
                    }
                }
            }
        }

        let total = self.update(self.config.initial_pages);
        self.loaded = true;
        total
    }

    /// Collect `pages` pages and write the snapshot
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Config` if no snapshot path is configured or
    /// the snapshot cannot be written. Documents collected before a write
    /// failure stay in the store.
    pub fn refresh(&mut self, pages: usize) -> Result<usize, TrackerError> {
        let path = self.snapshot_path()?.to_path_buf();

        let total = self.update(pages);
        self.loaded = true;
        self.save_snapshot(&path)?;

        info!(path = %path.display(), total, "Snapshot written");
        Ok(total)
    }

    fn snapshot_path(&self) -> Result<&Path, TrackerError> {
        self.config
            .snapshot_path
            .as_deref()
            .ok_or_else(|| TrackerError::Config("snapshot_path is not set".to_string()))
    }

    /// Current store with a generation timestamp
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.documents.clone(), Local::now().naive_local())
    }

    /// Write the snapshot to `path`
    pub fn save_snapshot(&self, path: &Path) -> Result<(), TrackerError> {
        self.snapshot().write(path)
    }

    /// Append the documents of the snapshot at `path`; returns how many were added
    pub fn load_snapshot(&mut self, path: &Path) -> Result<usize, TrackerError> {
        let snapshot = Snapshot::read(path)?;
        let count = snapshot.documents.len();
        if count != snapshot.total_documents {
            warn!(
                declared = snapshot.total_documents,
                found = count,
                "Snapshot document count mismatch"
            );
        }

        self.documents.extend(snapshot.documents);
        self.loaded = true;
        Ok(count)
    }

    /// Documents filtered by kind and inclusive date range, newest first
    pub fn documents(
        &self,
        kind: Option<DocumentKind>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&Document> {
        query::documents(&self.documents, kind, from, to)
    }

    /// First document of `kind` with `meeting_number`
    pub fn document(&self, kind: DocumentKind, meeting_number: &str) -> Option<&Document> {
        query::document(&self.documents, kind, meeting_number)
    }

    /// Records grouped by category, optionally a single category
    pub fn records_by_category(&self, category: Option<&str>) -> IndexMap<String, Vec<&Record>> {
        query::records_by_category(&self.documents, category)
    }

    /// Flattened records matching `filter`
    pub fn records(&self, filter: &RecordFilter) -> Vec<RecordHit> {
        query::records(&self.documents, filter)
    }

    /// Case-insensitive search across record fields
    pub fn search(
        &self,
        text: &str,
        field: Option<SearchField>,
    ) -> Result<Vec<RecordHit>, TrackerError> {
        query::search(&self.documents, text, field)
    }

    /// Store statistics
    pub fn statistics(&self) -> Statistics {
        report::statistics(&self.documents)
    }

    /// Aggregate report over a period
    pub fn report(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        category: Option<&str>,
    ) -> Report {
        report::report(&self.documents, from, to, category)
    }

    /// Loaded flag and statistics
    pub fn status(&self) -> Status {
        Status {
            loaded: self.loaded,
            statistics: self.statistics(),
        }
    }

    /// Path snapshots are written to, if configured
    pub fn snapshot_location(&self) -> Option<PathBuf> {
        self.config.snapshot_path.clone()
    }
}
