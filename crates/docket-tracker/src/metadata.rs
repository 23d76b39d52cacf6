//! Meeting metadata read from announcement titles

use chrono::{NaiveDate, NaiveDateTime};
use docket_domain::{DocumentKind, MeetingType, UNKNOWN_MEETING_NUMBER};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_DATE: Regex = Regex::new(r"([0-9]{1,2})[/.]([0-9]{1,2})[/.]([0-9]{4})").unwrap();

    /// Meeting number rules, tried in order
    static ref MEETING_NUMBER_RULES: Vec<Regex> = vec![
        // nº 12, n° 12, n. 12, N 12
        Regex::new(r"(?i)\b(?:nº|n°|n\.?)\s*([0-9]+)").unwrap(),
        // 123ª Reunião, 12a Sessão
        Regex::new(r"(?i)([0-9]+)\s*[ªºa°]\s*(?:Reunião|Reuniao|Sessão|Sessao)").unwrap(),
    ];
}

/// Everything the tracker derives from a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingMetadata {
    /// Agenda or minutes
    pub kind: DocumentKind,
    /// Meeting date
    pub date: NaiveDateTime,
    /// Meeting number, `N/A` when absent
    pub meeting_number: String,
    /// Meeting type
    pub meeting_type: MeetingType,
}

/// Derive meeting metadata from `title`, using `now` when it has no valid date
pub fn parse_title(title: &str, now: NaiveDateTime) -> MeetingMetadata {
    MeetingMetadata {
        kind: document_kind(title),
        date: meeting_date(title).unwrap_or(now),
        meeting_number: meeting_number(title).unwrap_or_else(|| UNKNOWN_MEETING_NUMBER.to_string()),
        meeting_type: meeting_type(title),
    }
}

/// `agenda` when the title mentions a pauta
pub fn document_kind(title: &str) -> DocumentKind {
    if title.to_lowercase().contains("pauta") {
        DocumentKind::Agenda
    } else {
        DocumentKind::Minutes
    }
}

/// First day/month/year date in the title, if it is a real date
pub fn meeting_date(title: &str) -> Option<NaiveDateTime> {
    let caps = TITLE_DATE.captures(title)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    NaiveDate::from_ymd_opt(field(3)? as i32, field(2)?, field(1)?)?.and_hms_opt(0, 0, 0)
}

/// Meeting number from the first matching rule
pub fn meeting_number(title: &str) -> Option<String> {
    MEETING_NUMBER_RULES
        .iter()
        .find_map(|rule| rule.captures(title))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extraordinary takes precedence over circuit; ordinary otherwise
pub fn meeting_type(title: &str) -> MeetingType {
    let title = title.to_lowercase();
    if title.contains("extraordinária") || title.contains("extraordinaria") {
        MeetingType::Extraordinary
    } else if title.contains("circuito") {
        MeetingType::DeliberativeCircuit
    } else {
        MeetingType::Ordinary
    }
}
