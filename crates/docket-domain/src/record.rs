//! Case records - raw extractor output and the classified form stored in documents

use serde::{Deserialize, Serialize};

/// A case record as pulled out of document text, before classification
///
/// `number` is either a canonical case number (`48500.123456/2024-01`) or a
/// synthetic `Item-<n>` identifier from itemized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Case number (canonical or synthetic)
    pub number: String,

    /// Subject line resolved from the surrounding text
    pub subject: String,

    /// Ruling text, when the text carries one (minutes)
    pub ruling: Option<String>,

    /// Text the fields were read from (context window or item block)
    pub full_text: String,
}

impl RawRecord {
    /// Text used for classification
    ///
    /// The context window when one was captured, otherwise the subject.
    pub fn combined_text(&self) -> &str {
        if self.full_text.trim().is_empty() {
            &self.subject
        } else {
            &self.full_text
        }
    }
}

/// A classified case record
///
/// Created once by a classifier and never mutated afterwards. `category` is
/// always the display name of a taxonomy entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Case number
    pub number: String,

    /// Subject line
    pub subject: String,

    /// Ruling text
    pub ruling: Option<String>,

    /// Taxonomy category display name
    pub category: String,

    /// Up to three subcategories
    pub subcategories: Vec<String>,

    /// Short description, at most 100 characters
    pub description: Option<String>,
}

impl Record {
    /// Build a record from its raw form plus classification output
    pub fn classified(
        raw: &RawRecord,
        category: impl Into<String>,
        subcategories: Vec<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            number: raw.number.clone(),
            subject: raw.subject.clone(),
            ruling: raw.ruling.clone(),
            category: category.into(),
            subcategories,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(subject: &str, full_text: &str) -> RawRecord {
        RawRecord {
            number: "48500.123456/2024-01".to_string(),
            subject: subject.to_string(),
            ruling: None,
            full_text: full_text.to_string(),
        }
    }

    #[test]
    fn test_combined_text_prefers_full_text() {
        let record = raw("Reajuste", "48500.123456/2024-01 Assunto: Reajuste tarifário");
        assert!(record.combined_text().starts_with("48500"));
    }

    #[test]
    fn test_combined_text_falls_back_to_subject() {
        let record = raw("Reajuste tarifário", "   ");
        assert_eq!(record.combined_text(), "Reajuste tarifário");
    }

    #[test]
    fn test_classified_copies_raw_fields() {
        let mut source = raw("Revisão", "texto");
        source.ruling = Some("Aprovado".to_string());

        let record = Record::classified(
            &source,
            "Tarifas e Preços",
            vec!["Reajuste Tarifário".to_string()],
            Some("texto".to_string()),
        );

        assert_eq!(record.number, source.number);
        assert_eq!(record.subject, "Revisão");
        assert_eq!(record.ruling.as_deref(), Some("Aprovado"));
        assert_eq!(record.category, "Tarifas e Preços");
    }

    #[test]
    fn test_record_json_field_names() {
        let record = Record::classified(&raw("s", "t"), "Outros Assuntos", vec![], None);
        let json = serde_json::to_value(&record).unwrap();

        for field in ["number", "subject", "ruling", "category", "subcategories", "description"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
