//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docket_domain::{Document, Record};
use docket_tracker::{RecordHit, Report, Status};
use indexmap::IndexMap;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Cell width for subjects in record tables
const SUBJECT_CELL_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a document list.
    pub fn format_documents(&self, documents: &[&Document]) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(&documents),
            OutputFormat::Quiet => Ok(documents
                .iter()
                .map(|d| format!("{} {}", d.kind, d.meeting_number))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if documents.is_empty() {
                    return Ok(self.colorize("No documents found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Kind", "Meeting", "Type", "Date", "Records", "URL"]);
                for document in documents {
                    builder.push_record([
                        document.kind.to_string(),
                        document.meeting_number.clone(),
                        document.meeting_type.label().to_string(),
                        document.date.format("%d/%m/%Y").to_string(),
                        document.records.len().to_string(),
                        document.url.clone(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format one document with its records.
    pub fn format_document(&self, document: &Document) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(document),
            OutputFormat::Quiet => Ok(record_numbers(document.records.iter())),
            OutputFormat::Table => {
                let heading = format!(
                    "{} {} ({}) - {}",
                    document.kind,
                    document.meeting_number,
                    document.meeting_type.label(),
                    document.date.format("%d/%m/%Y")
                );
                let records: Vec<&Record> = document.records.iter().collect();
                Ok(format!(
                    "{}\n{}\n{}",
                    self.colorize(&heading, "cyan"),
                    document.url,
                    self.records_table(&records)
                ))
            }
        }
    }

    /// Format records grouped by category.
    pub fn format_themes(&self, groups: &IndexMap<String, Vec<&Record>>) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(groups),
            OutputFormat::Quiet => Ok(groups.keys().cloned().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if groups.is_empty() {
                    return Ok(self.colorize("No records found.", "yellow"));
                }

                let sections: Vec<String> = groups
                    .iter()
                    .map(|(category, records)| {
                        let heading = format!("{} ({})", category, records.len());
                        format!("{}\n{}", self.colorize(&heading, "cyan"), self.records_table(records))
                    })
                    .collect();
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format record hits from a filter or search.
    pub fn format_hits(&self, hits: &[RecordHit]) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(hits),
            OutputFormat::Quiet => Ok(record_numbers(hits.iter().map(|h| &h.record))),
            OutputFormat::Table => {
                if hits.is_empty() {
                    return Ok(self.colorize("No records found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Number", "Subject", "Category", "Document", "Date"]);
                for hit in hits {
                    builder.push_record([
                        hit.record.number.clone(),
                        clip(&hit.record.subject, SUBJECT_CELL_CHARS),
                        hit.record.category.clone(),
                        format!("{} {}", hit.document.kind, hit.document.meeting_number),
                        hit.document.date.format("%d/%m/%Y").to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format an aggregate report.
    pub fn format_report(&self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Json => json(report),
            OutputFormat::Quiet => Ok(report.totals.records.to_string()),
            OutputFormat::Table => {
                let period = format!(
                    "Period: {} to {}",
                    report.period.from.map_or("start".to_string(), |d| d.to_string()),
                    report.period.to.map_or("today".to_string(), |d| d.to_string())
                );
                let totals = format!(
                    "Documents: {}  Agendas: {}  Minutes: {}  Records: {}",
                    report.totals.documents,
                    report.totals.agendas,
                    report.totals.minutes,
                    report.totals.records
                );

                let mut builder = Builder::default();
                builder.push_record(["Category", "Records", "Subcategories"]);
                for (category, entry) in &report.by_category {
                    let subcategories = entry
                        .subcategories
                        .iter()
                        .map(|(name, count)| format!("{} ({})", name, count))
                        .collect::<Vec<_>>()
                        .join(", ");
                    builder.push_record([category.clone(), entry.total.to_string(), subcategories]);
                }

                Ok(format!(
                    "{}\n{}\n{}",
                    self.colorize(&period, "cyan"),
                    totals,
                    self.table(builder)
                ))
            }
        }
    }

    /// Format tracker status and statistics.
    pub fn format_status(&self, status: &Status) -> Result<String> {
        let stats = &status.statistics;
        match self.format {
            OutputFormat::Json => json(status),
            OutputFormat::Quiet => Ok(stats.total_documents.to_string()),
            OutputFormat::Table => {
                let date = |d: Option<chrono::NaiveDateTime>| {
                    d.map_or("-".to_string(), |d| d.format("%d/%m/%Y").to_string())
                };

                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Loaded".to_string(), status.loaded.to_string()]);
                builder.push_record(["Documents".to_string(), stats.total_documents.to_string()]);
                builder.push_record(["Agendas".to_string(), stats.total_agendas.to_string()]);
                builder.push_record(["Minutes".to_string(), stats.total_minutes.to_string()]);
                builder.push_record(["Records".to_string(), stats.total_records.to_string()]);
                builder.push_record(["Earliest".to_string(), date(stats.earliest_date)]);
                builder.push_record(["Latest".to_string(), date(stats.latest_date)]);
                for (category, count) in &stats.records_by_category {
                    builder.push_record([format!("  {}", category), count.to_string()]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn records_table(&self, records: &[&Record]) -> String {
        if records.is_empty() {
            return self.colorize("No records extracted.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Number", "Subject", "Category", "Subcategories", "Ruling"]);
        for record in records {
            builder.push_record([
                record.number.clone(),
                clip(&record.subject, SUBJECT_CELL_CHARS),
                record.category.clone(),
                record.subcategories.join(", "),
                record.ruling.as_deref().map_or(String::new(), |r| clip(r, SUBJECT_CELL_CHARS)),
            ]);
        }
        self.table(builder)
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn record_numbers<'a>(records: impl Iterator<Item = &'a Record>) -> String {
    records.map(|r| r.number.as_str()).collect::<Vec<_>>().join("\n")
}

/// Shorten `text` to `max` characters for a table cell
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
