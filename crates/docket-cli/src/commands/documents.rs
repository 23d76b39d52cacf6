//! Document listing and lookup commands.

use crate::cli::{DocumentArgs, DocumentsArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docket_domain::DocumentKind;
use docket_tracker::DocketTracker;

/// Execute the documents command.
pub fn execute_documents(
    args: DocumentsArgs,
    tracker: &mut DocketTracker,
    formatter: &Formatter,
) -> Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            return Err(CliError::InvalidInput(format!(
                "--from {} is after --to {}",
                from, to
            )));
        }
    }

    tracker.ensure_loaded();
    let documents = tracker.documents(args.kind.map(Into::into), args.from, args.to);
    println!("{}", formatter.format_documents(&documents)?);
    Ok(())
}

/// Execute the document command.
pub fn execute_document(
    args: DocumentArgs,
    tracker: &mut DocketTracker,
    formatter: &Formatter,
) -> Result<()> {
    tracker.ensure_loaded();

    let kind: DocumentKind = args.kind.into();
    let document = tracker
        .document(kind, &args.number)
        .ok_or_else(|| CliError::NotFound(format!("{} {}", kind, args.number)))?;

    println!("{}", formatter.format_document(document)?);
    Ok(())
}
