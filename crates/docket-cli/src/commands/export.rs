//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::output::Formatter;
use docket_tracker::DocketTracker;

/// Execute the export command.
pub fn execute_export(args: ExportArgs, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    let total = tracker.ensure_loaded();
    tracker.save_snapshot(&args.path)?;

    println!(
        "{}",
        formatter.success(&format!("Exported {} document(s) to {}", total, args.path.display()))
    );
    Ok(())
}
