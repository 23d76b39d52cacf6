//! Update command implementation.

use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::output::Formatter;
use docket_tracker::DocketTracker;
use tracing::warn;

/// Execute the update command.
///
/// Restores the existing snapshot first so the rewritten file keeps
/// earlier documents.
pub fn execute_update(args: UpdateArgs, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    let pages = args.pages.unwrap_or(tracker.config().default_pages);

    if let Some(path) = tracker.snapshot_location().filter(|p| p.exists()) {
        if let Err(e) = tracker.load_snapshot(&path) {
            warn!(path = %path.display(), error = %e, "Existing snapshot ignored");
        }
    }

    let before = tracker.all_documents().len();
    let total = tracker.refresh(pages)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Collected {} document(s) from {} page(s), {} in store",
            total - before,
            pages,
            total
        ))
    );
    Ok(())
}
