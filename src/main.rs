//! bundle-overlay CLI
//!
//! Usage: bundle-overlay <COMMAND>
//!
//! Commands:
//!   build   Bundle the project once
//!   watch   Bundle, then rebuild whenever the source directory changes

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build { project } => commands::build::cmd_build(&project, cli.json),
        Commands::Watch { project } => commands::watch::cmd_watch(&project, cli.json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `info`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
