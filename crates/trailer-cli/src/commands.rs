//! Command handlers

use crate::cli::{Cli, Commands, RunArgs};
use crate::output::output_trailers;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use trailer_app::app::{sync_trailers, ProgressCallback, SyncEvent, SyncOptions, SyncOutcome};
use trailer_app::config::Config;
use trailer_app::repository::open_trailer_repo;
use trailer_domain::repository::TrailerRepository;
use trailer_infra::persistence::SqliteTrailerRepository;
use trailer_infra::vpic_client::VpicClient;
use trailer_types::{OutputFormat, Result};
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        None => cmd_run(apply_run_args(config, RunArgs::default())),

        Some(Commands::Run(args)) => cmd_run(apply_run_args(config, args)),

        Some(Commands::List {
            database,
            format,
            limit,
        }) => {
            let output_format = format.unwrap_or(config.output_format);
            let database = database.unwrap_or_else(|| config.database_path.clone());
            cmd_list(database, output_format, limit)
        }

        Some(Commands::Config {
            show,
            set_input,
            set_api_url,
            set_database,
            set_spreadsheet,
            set_batch_size,
            set_timeout,
            set_output,
            reset,
        }) => cmd_config(
            show,
            set_input,
            set_api_url,
            set_database,
            set_spreadsheet,
            set_batch_size,
            set_timeout,
            set_output,
            reset,
        ),
    }
}

/// Override config values from CLI args
fn apply_run_args(mut config: Config, args: RunArgs) -> Config {
    if let Some(input) = args.input {
        config.input_csv = input;
    }
    if let Some(database) = args.database {
        config.database_path = database;
    }
    if let Some(spreadsheet) = args.spreadsheet {
        config.spreadsheet_path = spreadsheet;
    }
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if args.timeout.is_some() {
        config.request_timeout_secs = args.timeout;
    }
    config
}

fn cmd_run(config: Config) -> Result<()> {
    config.validate()?;

    let client = VpicClient::new(config.api_url.clone(), config.request_timeout())?;

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let progress_pb = pb.clone();
    let progress: ProgressCallback = Box::new(move |event: SyncEvent| match event {
        SyncEvent::Loaded { vins, batches } => {
            println!("Fetching data for {} VINs...", vins);
            progress_pb.set_length(batches as u64);
        }
        SyncEvent::BatchDecoded { done, .. } => progress_pb.set_position(done as u64),
    });

    let outcome = sync_trailers(
        &SyncOptions::from(&config),
        &client,
        || open_trailer_repo(&config),
        Some(progress),
    );
    pb.finish_and_clear();

    println!("{}", outcome_message(&outcome?));

    Ok(())
}

/// Final line(s) printed by `run`
fn outcome_message(outcome: &SyncOutcome) -> String {
    match outcome {
        SyncOutcome::NoVins => "No VINs found.".to_string(),
        SyncOutcome::NoTrailers { .. } => "No trailers found.".to_string(),
        SyncOutcome::Stored(report) => format!(
            "Stored {} trailer VINs successfully at {} ({} new)\nSpreadsheet: {}",
            report.trailers.len(),
            report.finished_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            report.inserted,
            report.spreadsheet.display()
        ),
    }
}

fn cmd_list(database: PathBuf, output_format: OutputFormat, limit: Option<usize>) -> Result<()> {
    // Listing must not create an empty database as a side effect
    if !database.exists() {
        println!("No trailers stored ({} does not exist)", database.display());
        return Ok(());
    }

    let repo = SqliteTrailerRepository::open(&database)?;
    let total = repo.count()?;

    let mut trailers = repo.find_all()?;
    if let Some(limit) = limit {
        trailers.truncate(limit);
    }

    output_trailers(output_format, &trailers, total)
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_input: Option<PathBuf>,
    set_api_url: Option<String>,
    set_database: Option<PathBuf>,
    set_spreadsheet: Option<PathBuf>,
    set_batch_size: Option<usize>,
    set_timeout: Option<u64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(input) = set_input {
        config.input_csv = input;
        modified = true;
    }

    if let Some(api_url) = set_api_url {
        config.api_url = api_url;
        modified = true;
    }

    if let Some(database) = set_database {
        config.database_path = database;
        modified = true;
    }

    if let Some(spreadsheet) = set_spreadsheet {
        config.spreadsheet_path = spreadsheet;
        modified = true;
    }

    if let Some(batch_size) = set_batch_size {
        config.batch_size = batch_size;
        modified = true;
    }

    if let Some(timeout) = set_timeout {
        config.request_timeout_secs = if timeout == 0 { None } else { Some(timeout) };
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.validate()?;
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
