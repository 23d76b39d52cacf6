//! Store statistics and aggregate reports

use crate::query::{self, category_matches};
use chrono::{NaiveDate, NaiveDateTime};
use docket_domain::{Document, DocumentKind};
use indexmap::IndexMap;
use serde::Serialize;

/// Counts over the whole store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Documents in the store
    pub total_documents: usize,
    /// Agenda documents
    pub total_agendas: usize,
    /// Minutes documents
    pub total_minutes: usize,
    /// Records across all documents
    pub total_records: usize,
    /// Records per category, first-seen order
    pub records_by_category: IndexMap<String, usize>,
    /// Most recent meeting date
    pub latest_date: Option<NaiveDateTime>,
    /// Oldest meeting date
    pub earliest_date: Option<NaiveDateTime>,
}

/// Compute store statistics
pub fn statistics(store: &[Document]) -> Statistics {
    let mut records_by_category: IndexMap<String, usize> = IndexMap::new();
    for record in store.iter().flat_map(|d| &d.records) {
        *records_by_category.entry(record.category.clone()).or_insert(0) += 1;
    }

    Statistics {
        total_documents: store.len(),
        total_agendas: count_kind(store.iter(), DocumentKind::Agenda),
        total_minutes: count_kind(store.iter(), DocumentKind::Minutes),
        total_records: store.iter().map(|d| d.records.len()).sum(),
        records_by_category,
        latest_date: store.iter().map(|d| d.date).max(),
        earliest_date: store.iter().map(|d| d.date).min(),
    }
}

fn count_kind<'a>(documents: impl Iterator<Item = &'a Document>, kind: DocumentKind) -> usize {
    documents.filter(|d| d.kind == kind).count()
}

/// Date range a report covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    /// Inclusive start
    pub from: Option<NaiveDate>,
    /// Inclusive end
    pub to: Option<NaiveDate>,
}

/// Report totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Documents in the period
    pub documents: usize,
    /// Agendas in the period
    pub agendas: usize,
    /// Minutes in the period
    pub minutes: usize,
    /// Records counted (after the category filter)
    pub records: usize,
}

/// Per-category breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Records in the category
    pub total: usize,
    /// Records per subcategory
    pub subcategories: IndexMap<String, usize>,
}

/// Aggregate report over a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Covered period
    pub period: Period,
    /// Totals
    pub totals: Totals,
    /// Breakdown per category, first-seen order
    pub by_category: IndexMap<String, CategoryReport>,
}

/// Build a report over documents dated within `from..=to`, optionally
/// counting only records of `category`
///
/// Document totals cover the whole period; the category filter narrows the
/// record counts only.
pub fn report(
    store: &[Document],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    category: Option<&str>,
) -> Report {
    let documents = query::documents(store, None, from, to);

    let mut by_category: IndexMap<String, CategoryReport> = IndexMap::new();
    let mut records = 0;

    for record in documents.iter().flat_map(|d| &d.records) {
        if !category.map_or(true, |c| category_matches(&record.category, c)) {
            continue;
        }
        records += 1;

        let entry = by_category.entry(record.category.clone()).or_default();
        entry.total += 1;
        for subcategory in &record.subcategories {
            *entry.subcategories.entry(subcategory.clone()).or_insert(0) += 1;
        }
    }

    Report {
        period: Period { from, to },
        totals: Totals {
            documents: documents.len(),
            agendas: count_kind(documents.iter().copied(), DocumentKind::Agenda),
            minutes: count_kind(documents.iter().copied(), DocumentKind::Minutes),
            records,
        },
        by_category,
    }
}
