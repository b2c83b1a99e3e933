//! unitgen - per-unit YAML configuration generator
//!
//! Expands a YAML template once per unit (e.g. one heat pump per room),
//! substituting NAME, HOSTNAME and HANAME, and merges the per-unit documents
//! into one configuration.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod error;
mod expander;
mod output;
mod template;
mod units;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("unitgen={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Expand(args) => commands::expand::run(cli.workspace, cli.units, args),
        Commands::Generate(args) => commands::generate::run(cli.workspace, cli.units, args),
        Commands::Units => commands::units::run(cli.workspace, cli.units),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
