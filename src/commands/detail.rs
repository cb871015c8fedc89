use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use crate::config::TriageConfig;
use crate::normalize::normalize_all;
use crate::output::json;
use crate::report;

#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Identifier, e.g. CVE-2025-12345
    pub cve_id: String,

    /// Bulletin month, e.g. 2025-Aug (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Read a saved feed document instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Policy configuration file (defaults to ./patchmap.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn handle_detail(args: DetailArgs) -> Result<()> {
    let config = TriageConfig::load(args.config.as_deref())?;
    let (document, year_month) = super::acquire_feed(args.month.as_deref(), args.input.as_deref())?;
    let records = normalize_all(&document, &config);

    match report::detail(&records, &args.cve_id) {
        Some(record) => {
            println!("{}", json::format_detail_json(record)?);
            Ok(())
        }
        None => bail!("no entry for {} in {year_month}", args.cve_id),
    }
}
