//! Record listing, grouping and search commands.

use crate::cli::{RecordsArgs, SearchArgs, ThemesArgs};
use crate::error::Result;
use crate::output::Formatter;
use docket_tracker::{DocketTracker, RecordFilter, RecordHit};

/// Execute the themes command.
pub fn execute_themes(args: ThemesArgs, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    tracker.ensure_loaded();
    let groups = tracker.records_by_category(args.category.as_deref());
    println!("{}", formatter.format_themes(&groups)?);
    Ok(())
}

/// Execute the records command.
pub fn execute_records(args: RecordsArgs, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    let mut filter = RecordFilter::default();
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(subcategory) = args.subcategory {
        filter = filter.subcategory(subcategory);
    }
    if let Some(kind) = args.kind {
        filter = filter.kind(kind.into());
    }

    tracker.ensure_loaded();
    let hits = limit(tracker.records(&filter), args.limit);
    println!("{}", formatter.format_hits(&hits)?);
    Ok(())
}

/// Execute the search command.
pub fn execute_search(args: SearchArgs, tracker: &mut DocketTracker, formatter: &Formatter) -> Result<()> {
    tracker.ensure_loaded();
    let hits = limit(tracker.search(&args.query, args.field)?, args.limit);
    println!("{}", formatter.format_hits(&hits)?);
    Ok(())
}

fn limit(mut hits: Vec<RecordHit>, limit: Option<usize>) -> Vec<RecordHit> {
    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    hits
}
