//! Command implementations.

pub mod documents;
pub mod export;
pub mod init;
pub mod records;
pub mod report;
pub mod update;

pub use self::documents::{execute_document, execute_documents};
pub use self::export::execute_export;
pub use self::init::execute_init;
pub use self::records::{execute_records, execute_search, execute_themes};
pub use self::report::{execute_report, execute_stats};
pub use self::update::execute_update;

use crate::cli::Command;
use crate::error::Result;
use crate::output::Formatter;
use docket_tracker::DocketTracker;

/// Dispatch a parsed command.
///
/// `Init` runs before any configuration or snapshot is loaded; see `execute_init`.
pub fn execute(command: Command, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    match command {
        Command::Update(args) => execute_update(args, tracker, formatter),
        Command::Documents(args) => execute_documents(args, tracker, formatter),
        Command::Document(args) => execute_document(args, tracker, formatter),
        Command::Themes(args) => execute_themes(args, tracker, formatter),
        Command::Records(args) => execute_records(args, tracker, formatter),
        Command::Search(args) => execute_search(args, tracker, formatter),
        Command::Report(args) => execute_report(args, tracker, formatter),
        Command::Stats => execute_stats(tracker, formatter),
        Command::Export(args) => execute_export(args, tracker, formatter),
        Command::Init(_) => Err(crate::error::CliError::Config(
            "init does not operate on a tracker".to_string(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use docket_classifier::LexicalClassifier;
    use docket_domain::traits::AnnouncementSource;
    use docket_domain::RawAnnouncement;
    use docket_tracker::{DocketTracker, TrackerConfig};
    use std::path::Path;

    struct FixedSource;

    impl AnnouncementSource for FixedSource {
        fn collect(&self, _pages: usize) -> Vec<RawAnnouncement> {
            let publication_date = NaiveDate::from_ymd_opt(2024, 5, 8)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            vec![
                RawAnnouncement {
                    title: "Pauta nº 12 de 10/05/2024: 48500.000001/2024-11 Assunto: Reajuste da tarifa anual.".to_string(),
                    url: Some("https://example.org/pauta-12".to_string()),
                    publication_date,
                    raw_body: String::new(),
                },
                RawAnnouncement {
                    title: "Ata da Reunião Extraordinária nº 4 de 02/05/2024".to_string(),
                    url: None,
                    publication_date,
                    raw_body: String::new(),
                },
            ]
        }
    }

    /// Tracker over two fixed announcements, snapshotting to `snapshot`
    pub fn tracker(snapshot: &Path) -> DocketTracker {
        DocketTracker::with_parts(
            Box::new(FixedSource),
            Box::new(LexicalClassifier::new()),
            TrackerConfig::default().with_snapshot_path(snapshot),
        )
        .unwrap()
    }
}
