//! Read-only queries over the document store
//!
//! Every function here is a pure function of the documents it is given.

use crate::error::TrackerError;
use chrono::NaiveDate;
use docket_domain::taxonomy;
use docket_domain::{Document, DocumentKind, DocumentSummary, Record};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Filter for flattened record queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Category key or display name
    pub category: Option<String>,
    /// Subcategory name
    pub subcategory: Option<String>,
    /// Document kind
    pub kind: Option<DocumentKind>,
}

impl RecordFilter {
    /// Keep records in `category`
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep records tagged with `subcategory`
    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Keep records from documents of `kind`
    pub fn kind(mut self, kind: DocumentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    fn matches(&self, record: &Record) -> bool {
        if let Some(category) = &self.category {
            if !category_matches(&record.category, category) {
                return false;
            }
        }
        if let Some(wanted) = &self.subcategory {
            let wanted = wanted.trim().to_lowercase();
            if !record.subcategories.iter().any(|s| s.to_lowercase() == wanted) {
                return false;
            }
        }
        true
    }
}

/// A record paired with the document it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordHit {
    /// The record
    #[serde(flatten)]
    pub record: Record,
    /// Its document
    pub document: DocumentSummary,
}

/// Record field a search can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Case number
    Number,
    /// Subject line
    Subject,
    /// Ruling text
    Ruling,
    /// Short description
    Description,
}

impl SearchField {
    const ALL: [SearchField; 4] = [
        SearchField::Number,
        SearchField::Subject,
        SearchField::Ruling,
        SearchField::Description,
    ];

    fn value<'a>(&self, record: &'a Record) -> Option<&'a str> {
        match self {
            SearchField::Number => Some(&record.number),
            SearchField::Subject => Some(&record.subject),
            SearchField::Ruling => record.ruling.as_deref(),
            SearchField::Description => record.description.as_deref(),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchField::Number => "number",
            SearchField::Subject => "subject",
            SearchField::Ruling => "ruling",
            SearchField::Description => "description",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchField {
    type Err = String;

    /// Accepts the field names and their Portuguese equivalents
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "number" | "numero" => Ok(SearchField::Number),
            "subject" | "assunto" => Ok(SearchField::Subject),
            "ruling" | "deliberacao" => Ok(SearchField::Ruling),
            "description" | "descricao" | "descricao_sucinta" => Ok(SearchField::Description),
            other => Err(format!("Unknown search field: {}", other)),
        }
    }
}

/// Whether a record category satisfies a key or display-name filter
pub fn category_matches(record_category: &str, wanted: &str) -> bool {
    let wanted = taxonomy::by_key(wanted).map_or(wanted.trim(), |c| c.name);
    record_category.to_lowercase() == wanted.to_lowercase()
}

/// Documents filtered by kind and inclusive date range, newest first
pub fn documents(
    store: &[Document],
    kind: Option<DocumentKind>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&Document> {
    let mut found: Vec<&Document> = store
        .iter()
        .filter(|d| kind.map_or(true, |k| d.kind == k))
        .filter(|d| from.map_or(true, |from| d.date.date() >= from))
        .filter(|d| to.map_or(true, |to| d.date.date() <= to))
        .collect();

    found.sort_by(|a, b| b.date.cmp(&a.date));
    found
}

/// First document of `kind` with `meeting_number`
pub fn document<'a>(
    store: &'a [Document],
    kind: DocumentKind,
    meeting_number: &str,
) -> Option<&'a Document> {
    store
        .iter()
        .find(|d| d.kind == kind && d.meeting_number == meeting_number)
}

/// Records grouped by category, groups and members in first-seen order
pub fn records_by_category<'a>(
    store: &'a [Document],
    category: Option<&str>,
) -> IndexMap<String, Vec<&'a Record>> {
    let mut groups: IndexMap<String, Vec<&Record>> = IndexMap::new();

    for record in store.iter().flat_map(|d| &d.records) {
        if category.map_or(true, |c| category_matches(&record.category, c)) {
            groups.entry(record.category.clone()).or_default().push(record);
        }
    }
    groups
}

/// Flattened records matching `filter`, newest documents first
pub fn records(store: &[Document], filter: &RecordFilter) -> Vec<RecordHit> {
    documents(store, filter.kind, None, None)
        .into_iter()
        .flat_map(|document| {
            document
                .records
                .iter()
                .filter(move |record| filter.matches(record))
                .map(move |record| RecordHit {
                    record: record.clone(),
                    document: document.summary(),
                })
        })
        .collect()
}

/// Case-insensitive substring search over record fields, in store order
///
/// # Errors
///
/// Returns `TrackerError::InvalidQuery` for an empty query.
pub fn search(
    store: &[Document],
    query: &str,
    field: Option<SearchField>,
) -> Result<Vec<RecordHit>, TrackerError> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Err(TrackerError::InvalidQuery("search term is empty".to_string()));
    }

    let fields: &[SearchField] = match &field {
        Some(field) => std::slice::from_ref(field),
        None => &SearchField::ALL,
    };

    let hits = store
        .iter()
        .flat_map(|document| document.records.iter().map(move |record| (document, record)))
        .filter(|(_, record)| {
            fields
                .iter()
                .filter_map(|f| f.value(record))
                .any(|value| value.to_lowercase().contains(&query))
        })
        .map(|(document, record)| RecordHit {
            record: record.clone(),
            document: document.summary(),
        })
        .collect();

    Ok(hits)
}
