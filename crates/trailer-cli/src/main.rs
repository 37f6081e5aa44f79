//! Trailer Sync - store trailer VINs decoded by NHTSA vPIC
//!
//! A CLI tool that decodes a CSV list of VINs, keeps the trailers, and
//! writes them to SQLite and a spreadsheet.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "warn,trailer_sync=debug,trailer_app=debug,trailer_infra=debug";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
