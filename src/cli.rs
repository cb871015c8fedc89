//! Command-line interface definitions. Each subcommand carries its handler's
//! args struct directly, so parsing and dispatch share one definition.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{DetailArgs, ExportArgs, ReportArgs};

#[derive(Parser)]
#[command(
    name = "patchmap",
    about = "Monthly security-bulletin triage and patch prioritization",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the full triage report for one month
    Report(ReportArgs),

    /// Look up one vulnerability by CVE id and print its JSON detail payload
    Detail(DetailArgs),

    /// Export selected vulnerabilities as CSV
    Export(ExportArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}
