use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::TriageConfig;
use crate::normalize::normalize_all;
use crate::output::{self, csv};
use crate::report::select_by_ids;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Comma-separated CVE ids to export
    #[arg(long, value_delimiter = ',', required = true)]
    pub ids: Vec<String>,

    /// Bulletin month, e.g. 2025-Aug (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Read a saved feed document instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Policy configuration file (defaults to ./patchmap.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn handle_export(args: ExportArgs) -> Result<()> {
    let config = TriageConfig::load(args.config.as_deref())?;
    let (document, _) = super::acquire_feed(args.month.as_deref(), args.input.as_deref())?;
    let records = normalize_all(&document, &config);

    let selected = select_by_ids(&records, &args.ids);
    if selected.is_empty() {
        log::warn!("no entries matched the requested ids; emitting header only");
    }
    let rendered = csv::format_records(&selected)?;
    output::write_output(&rendered, args.output.as_deref())
}
