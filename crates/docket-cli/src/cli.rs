//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use docket_domain::DocumentKind;
use docket_tracker::SearchField;
use std::path::PathBuf;

/// Docket CLI - Track regulator meeting agendas and minutes.
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot file path
    #[arg(short, long, global = true, env = "DOCKET_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect listing pages and write the snapshot
    Update(UpdateArgs),

    /// List agendas and minutes
    Documents(DocumentsArgs),

    /// Show one document and its records
    Document(DocumentArgs),

    /// Records grouped by category
    Themes(ThemesArgs),

    /// List records with filters
    Records(RecordsArgs),

    /// Search record fields
    Search(SearchArgs),

    /// Aggregate report over a period
    Report(ReportArgs),

    /// Store statistics
    Stats,

    /// Write the store to a JSON file
    Export(ExportArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the update command.
#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Listing pages to collect (defaults to the configured page count)
    #[arg(short, long)]
    pub pages: Option<usize>,
}

/// Arguments for the documents command.
#[derive(Debug, Parser)]
pub struct DocumentsArgs {
    /// Document kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// First meeting date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last meeting date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,
}

/// Arguments for the document command.
#[derive(Debug, Parser)]
pub struct DocumentArgs {
    /// Document kind
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Meeting number
    pub number: String,
}

/// Arguments for the themes command.
#[derive(Debug, Parser)]
pub struct ThemesArgs {
    /// Only this category (key or name)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the records command.
#[derive(Debug, Parser)]
pub struct RecordsArgs {
    /// Category key or name
    #[arg(short, long)]
    pub category: Option<String>,

    /// Subcategory name
    #[arg(short, long)]
    pub subcategory: Option<String>,

    /// Document kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Text to look for
    pub query: String,

    /// Restrict to one field (number, subject, ruling, description)
    #[arg(long)]
    pub field: Option<SearchField>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// First meeting date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last meeting date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Only this category (key or name)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file
    pub path: PathBuf,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Document kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    /// Meeting agenda
    #[value(alias = "pauta")]
    Agenda,
    /// Meeting minutes
    #[value(alias = "ata")]
    Minutes,
}

/// Parse `YYYY-MM-DD` or `DD/MM/YYYY`
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD or DD/MM/YYYY", value))
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Agenda => DocumentKind::Agenda,
            KindArg::Minutes => DocumentKind::Minutes,
        }
    }
}
