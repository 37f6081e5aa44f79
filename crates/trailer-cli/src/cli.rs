//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trailer_types::OutputFormat;

#[derive(Parser)]
#[command(name = "trailer-sync")]
#[command(version)]
#[command(about = "Decode VINs through NHTSA vPIC and store the trailers")]
#[command(long_about = None)]
pub struct Cli {
    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch VIN data, keep the trailers, store and export them
    Run(RunArgs),

    /// Show stored trailers
    List {
        /// Database file. Uses config value if not specified.
        #[arg(long)]
        database: Option<PathBuf>,

        /// Output format (json, table). Uses config value if not specified.
        #[arg(long, short = 'f')]
        format: Option<OutputFormat>,

        /// Limit number of entries shown
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set input CSV path
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// Set vPIC batch decode URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set database path
        #[arg(long)]
        set_database: Option<PathBuf>,

        /// Set spreadsheet path
        #[arg(long)]
        set_spreadsheet: Option<PathBuf>,

        /// Set VINs per request
        #[arg(long)]
        set_batch_size: Option<usize>,

        /// Set request timeout in seconds (0 = no timeout)
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Per-run overrides of the configured paths and endpoint
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// CSV file with a VIN column
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// SQLite database file
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Spreadsheet output file
    #[arg(long, short = 'o')]
    pub spreadsheet: Option<PathBuf>,

    /// vPIC batch decode URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// VINs per request
    #[arg(long, short = 'b')]
    pub batch_size: Option<usize>,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(long)]
    pub timeout: Option<u64>,
}
