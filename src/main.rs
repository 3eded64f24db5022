//! txn-export - Filter cached bank transactions by date range and export them as CSV.
//!
//! A page scraper caches transaction rows together with the date window the
//! user asked for. This tool turns that cache into a CSV file:
//!
//!   txn-export export cache.json                 # Write cached_transactions_<start>_to_<end>.csv
//!   txn-export export cache.json --stdout        # Print the CSV instead
//!   txn-export recover dump.json                 # Same export from a sessionStorage dump
//!   txn-export preview cache.json --start 1/1/2024 --end 1/15/2024
//!   txn-export stats cache.json                  # Why rows were or weren't included

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    filter_by_date_range, format_summary, format_transactions, run_export, ExportOutcome,
    OutputFormat,
};
use cli::{Cli, Commands, OutputArgs, RangeArgs};
use domain::{AppConfig, CachedExportRequest};
use infrastructure::{
    config_file_path, decode_storage_dump, ensure_config_exists, load_config, read_request,
    read_source, render_config, write_export,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let format = cli
        .output_format()
        .map_err(|e| domain::AppError::Config { message: e })?;

    match cli.command {
        Commands::Export {
            input,
            range,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let request = read_request(&input)?;
            cmd_export(request, range, &output, &config)?;
        }
        Commands::Recover {
            dump,
            range,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let request = decode_storage_dump(&read_source(&dump)?, &config.session)?;
            cmd_export(request, range, &output, &config)?;
        }
        Commands::Preview { input, range } => {
            cmd_preview(&input, range, format)?;
        }
        Commands::Stats { input, range } => {
            cmd_stats(&input, range)?;
        }
        Commands::Config { init } => {
            cmd_config(cli.config.as_deref(), init)?;
        }
    }

    Ok(())
}

/// Applies command-line boundary overrides to a cached request.
fn with_range(request: CachedExportRequest, range: RangeArgs) -> CachedExportRequest {
    request.with_boundaries(range.start, range.end)
}

/// Export a cached request to a file or stdout.
fn cmd_export(
    request: CachedExportRequest,
    range: RangeArgs,
    output: &OutputArgs,
    config: &AppConfig,
) -> domain::Result<()> {
    let request = with_range(request, range);

    let export = match run_export(&request) {
        ExportOutcome::NoData => {
            eprintln!(
                "{} No cached transactions found. Capture transactions on the page first.",
                "!".yellow().bold()
            );
            return Ok(());
        }
        ExportOutcome::Exported(export) => export,
    };

    if output.stdout {
        print!("{}", export.document);
        eprintln!("{}", export.summary_line());
        return Ok(());
    }

    let dir = output
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir());
    let path = write_export(&dir, &export)?;

    println!("{} {}", "✓".green().bold(), export.summary_line());
    println!("  → {}", path.display().to_string().cyan());

    Ok(())
}

/// Show the transactions that would be exported.
fn cmd_preview(input: &str, range: RangeArgs, format: OutputFormat) -> domain::Result<()> {
    let request = with_range(read_request(input)?, range);
    let filtered =
        filter_by_date_range(request.transactions(), request.start_date(), request.end_date());

    let output =
        format_transactions(&filtered.included, format).map_err(domain::AppError::json_parse)?;

    match format {
        OutputFormat::Table => {
            println!("{output}");
            println!();
            println!(
                "{} of {} cached transactions in range",
                filtered.summary.included, filtered.summary.total_cached
            );
        }
        OutputFormat::Json => println!("{output}"),
        OutputFormat::Csv => print!("{output}"),
    }

    Ok(())
}

/// Show filtering statistics.
fn cmd_stats(input: &str, range: RangeArgs) -> domain::Result<()> {
    let request = with_range(read_request(input)?, range);
    let filtered =
        filter_by_date_range(request.transactions(), request.start_date(), request.end_date());

    println!("{}", format_summary(&filtered.summary));

    Ok(())
}

/// Show (and optionally create) the configuration file.
fn cmd_config(explicit: Option<&Path>, init: bool) -> domain::Result<()> {
    let path = config_file_path(explicit);

    if init {
        if ensure_config_exists(&path)? {
            println!("{} Created {}", "✓".green().bold(), path.display());
        } else {
            println!("Config already exists: {}", path.display());
        }
    }

    let config = load_config(explicit)?;

    println!("{} {}", "⚙️  Config file:".bold(), path.display());
    println!();
    println!("{}", render_config(&config)?);

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
///
/// Logs go to stderr so `--stdout` exports stay clean.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}
