//! Keyword scoring strategy

use docket_domain::taxonomy::{self, Category, GENERIC_SUBCATEGORY, TAXONOMY};
use docket_domain::traits::RecordClassifier;
use docket_domain::{RawRecord, Record};

/// Maximum description length, ellipsis included
pub const MAX_DESCRIPTION_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Classifies records by counting taxonomy keywords in their text
///
/// Pure and deterministic: the same text always yields the same record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalClassifier;

impl LexicalClassifier {
    /// Create a lexical classifier
    pub fn new() -> Self {
        Self
    }

    /// Number of distinct keywords of each category present in `text`
    pub fn scores(text: &str) -> Vec<(&'static Category, usize)> {
        let text = text.to_lowercase();
        TAXONOMY
            .iter()
            .map(|category| {
                let hits = category
                    .keywords
                    .iter()
                    .filter(|keyword| text.contains(*keyword))
                    .count();
                (category, hits)
            })
            .collect()
    }

    /// Best-scoring category, earliest declared on ties, "Other" when nothing scores
    pub fn best_category(text: &str) -> &'static Category {
        let mut best: Option<(&'static Category, usize)> = None;
        for (category, score) in Self::scores(text) {
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((category, score));
            }
        }
        best.map_or_else(taxonomy::other, |(category, _)| category)
    }

    /// Default subcategories for `category`
    pub fn subcategories(category: &Category) -> Vec<String> {
        if category.key == taxonomy::OTHER_KEY {
            return vec![GENERIC_SUBCATEGORY.to_string()];
        }
        category
            .subcategories
            .iter()
            .take(2)
            .map(|s| s.to_string())
            .collect()
    }
}

/// Short description of `text`, at most 100 characters
///
/// Longer text is cut and ends with `...`.
pub fn describe(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return Some(text.to_string());
    }

    let keep = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
    let head: String = text.chars().take(keep).collect();
    Some(format!("{}{}", head.trim_end(), ELLIPSIS))
}

impl RecordClassifier for LexicalClassifier {
    fn classify(&self, record: &RawRecord) -> Record {
        let text = record.combined_text();
        let category = Self::best_category(text);

        Record::classified(
            record,
            category.name,
            Self::subcategories(category),
            describe(text),
        )
    }

    fn strategy(&self) -> &'static str {
        "lexical"
    }
}
