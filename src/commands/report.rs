use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::config::TriageConfig;
use crate::normalize::normalize_all;
use crate::output::{self, json, markdown, terminal};
use crate::report::build_report;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Bulletin month, e.g. 2025-Aug (defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Read a saved feed document instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Policy configuration file (defaults to ./patchmap.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn handle_report(args: ReportArgs) -> Result<()> {
    let config = TriageConfig::load(args.config.as_deref())?;
    let (document, year_month) = super::acquire_feed(args.month.as_deref(), args.input.as_deref())?;
    let records = normalize_all(&document, &config);
    let report = build_report(document.title(), &year_month, &records, &config);

    let rendered = match args.format {
        OutputFormat::Table => terminal::format_report_table(&report),
        OutputFormat::Json => json::format_report_json(&report)?,
        OutputFormat::Markdown => markdown::format_report_markdown(&report),
    };
    output::write_output(&rendered, args.output.as_deref())
}
