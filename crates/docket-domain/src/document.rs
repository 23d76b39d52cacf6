//! Documents (agendas and minutes) and the announcements they come from

use crate::record::Record;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meeting number used when the title carries none
pub const UNKNOWN_MEETING_NUMBER: &str = "N/A";

/// Kind of published document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Meeting agenda (pauta)
    Agenda,
    /// Meeting minutes (ata)
    Minutes,
}

impl DocumentKind {
    /// Wire name used in snapshots and queries
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Agenda => "agenda",
            DocumentKind::Minutes => "minutes",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    /// Accepts the wire names and the regulator's Portuguese terms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agenda" | "pauta" => Ok(DocumentKind::Agenda),
            "minutes" | "ata" => Ok(DocumentKind::Minutes),
            other => Err(format!("Unknown document kind: {}", other)),
        }
    }
}

/// Kind of meeting a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingType {
    /// Reunião Ordinária
    Ordinary,
    /// Reunião Extraordinária
    Extraordinary,
    /// Circuito Deliberativo
    DeliberativeCircuit,
}

impl MeetingType {
    /// Wire name used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::Ordinary => "ordinary",
            MeetingType::Extraordinary => "extraordinary",
            MeetingType::DeliberativeCircuit => "deliberative-circuit",
        }
    }

    /// Name as published by the regulator
    pub fn label(&self) -> &'static str {
        match self {
            MeetingType::Ordinary => "Reunião Ordinária",
            MeetingType::Extraordinary => "Reunião Extraordinária",
            MeetingType::DeliberativeCircuit => "Circuito Deliberativo",
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One listing entry gathered by a collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnouncement {
    /// Announcement title
    pub title: String,

    /// Absolute link to the announcement, if the item had one
    pub url: Option<String>,

    /// Publication date (collection time when the label was unreadable)
    pub publication_date: NaiveDateTime,

    /// HTML of the listing item
    pub raw_body: String,
}

/// A processed agenda or minutes document
///
/// Created once per announcement by the tracker and appended to its store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Agenda or minutes
    pub kind: DocumentKind,

    /// Meeting date
    pub date: NaiveDateTime,

    /// Meeting number, `N/A` when unknown
    pub meeting_number: String,

    /// Meeting type
    pub meeting_type: MeetingType,

    /// Source URL (empty when the announcement had no link)
    pub url: String,

    /// Classified case records in extraction order
    pub records: Vec<Record>,

    /// Publication date of the announcement
    pub publication_date: NaiveDateTime,
}

impl Document {
    /// Compact view of the document attached to record query results
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            kind: self.kind,
            date: self.date,
            meeting_number: self.meeting_number.clone(),
            meeting_type: self.meeting_type,
        }
    }
}

/// Document fields carried alongside flattened records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Agenda or minutes
    pub kind: DocumentKind,
    /// Meeting date
    pub date: NaiveDateTime,
    /// Meeting number
    pub meeting_number: String,
    /// Meeting type
    pub meeting_type: MeetingType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_document() -> Document {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Document {
            kind: DocumentKind::Agenda,
            date,
            meeting_number: "123".to_string(),
            meeting_type: MeetingType::DeliberativeCircuit,
            url: "https://example.org/pauta".to_string(),
            records: Vec::new(),
            publication_date: date,
        }
    }

    #[test]
    fn test_document_kind_parsing() {
        assert_eq!("agenda".parse::<DocumentKind>().unwrap(), DocumentKind::Agenda);
        assert_eq!("Pauta".parse::<DocumentKind>().unwrap(), DocumentKind::Agenda);
        assert_eq!("MINUTES".parse::<DocumentKind>().unwrap(), DocumentKind::Minutes);
        assert_eq!("ata".parse::<DocumentKind>().unwrap(), DocumentKind::Minutes);
        assert!("report".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(sample_document()).unwrap();
        assert_eq!(json["kind"], "agenda");
        assert_eq!(json["meeting_type"], "deliberative-circuit");
        assert_eq!(json["date"], "2024-05-10T00:00:00");
    }

    #[test]
    fn test_document_json_round_trip() {
        let document = sample_document();
        let json = serde_json::to_string(&document).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_summary_carries_meeting_fields() {
        let summary = sample_document().summary();
        assert_eq!(summary.meeting_number, "123");
        assert_eq!(summary.kind, DocumentKind::Agenda);
        assert_eq!(summary.meeting_type, MeetingType::DeliberativeCircuit);
    }

    #[test]
    fn test_meeting_type_labels() {
        assert_eq!(MeetingType::Ordinary.label(), "Reunião Ordinária");
        assert_eq!(MeetingType::Extraordinary.to_string(), "extraordinary");
    }
}
