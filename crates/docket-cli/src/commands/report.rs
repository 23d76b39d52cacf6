//! Report and statistics commands.

use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docket_tracker::DocketTracker;

/// Execute the report command.
pub fn execute_report(args: ReportArgs, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            return Err(CliError::InvalidInput(format!(
                "--from {} is after --to {}",
                from, to
            )));
        }
    }

    tracker.ensure_loaded();
    let report = tracker.report(args.from, args.to, args.category.as_deref());
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Execute the stats command.
pub fn execute_stats(tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    tracker.ensure_loaded();
    println!("{}", formatter.format_status(&tracker.status())?);
    Ok(())
}
