use anyhow::Result;
use clap::Parser;

use patchmap::cli::{Cli, Commands};
use patchmap::commands::{handle_detail, handle_export, handle_report};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => handle_report(args),
        Commands::Detail(args) => handle_detail(args),
        Commands::Export(args) => handle_export(args),
    }
}
