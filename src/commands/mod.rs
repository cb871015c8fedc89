//! Command handlers. Each one runs the same pipeline (acquire feed, normalize)
//! and differs only in which presentation adapter consumes the result.

mod detail;
mod export;
mod report;

pub use detail::{handle_detail, DetailArgs};
pub use export::{handle_export, ExportArgs};
pub use report::{handle_report, ReportArgs};

use std::path::Path;

use anyhow::Result;

use crate::fetch;
use crate::feed::FeedDocument;

/// Resolve the feed document and its month label: a saved document when
/// `--input` is given, otherwise one fetch for the requested (or current)
/// month.
pub(crate) fn acquire_feed(
    month: Option<&str>,
    input: Option<&Path>,
) -> Result<(FeedDocument, String)> {
    let year_month = month
        .map(str::to_string)
        .unwrap_or_else(fetch::current_year_month);
    let document = match input {
        Some(path) => {
            log::info!("reading feed document from {}", path.display());
            FeedDocument::from_path(path)?
        }
        None => fetch::fetch_feed(&year_month)?,
    };
    log::info!(
        "loaded {} entries for {year_month}",
        document.entries().len()
    );
    Ok((document, year_month))
}
