//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::OutputFormat;

/// txn-export - Filter cached bank transactions by date and export them as CSV.
///
/// Input is the cached export request captured from the bank page
/// (`{"transactions": [...], "startDate": "M/D/YYYY", "endDate": "M/D/YYYY"}`),
/// or for `recover`, a raw `JSON.stringify(sessionStorage)` dump.
#[derive(Parser, Debug)]
#[command(name = "txn-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for `preview`: table, json, or csv.
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Config file to use instead of ~/.txn-export/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Boundary date overrides shared by the pipeline commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start date (inclusive), replacing the cached one.
    #[arg(long)]
    pub start: Option<String>,

    /// End date (inclusive), replacing the cached one.
    #[arg(long)]
    pub end: Option<String>,
}

/// Where an export goes.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output directory (defaults to the configured one, else the current directory).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file.
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a cached request file as CSV.
    Export {
        /// Cached request JSON file ("-" for stdin).
        input: String,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Re-run an export from a pasted session-storage dump.
    Recover {
        /// Session-storage dump JSON file ("-" for stdin).
        #[arg(default_value = "-")]
        dump: String,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the transactions an export would include.
    Preview {
        /// Cached request JSON file ("-" for stdin).
        input: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show how many cached transactions fall in the range, and why others don't.
    Stats {
        /// Cached request JSON file ("-" for stdin).
        input: String,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show the effective configuration.
    Config {
        /// Write a default config file if none exists.
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_with_overrides() {
        let cli = Cli::try_parse_from([
            "txn-export",
            "export",
            "cache.json",
            "--start",
            "1/1/2024",
            "--end",
            "1/31/2024",
            "-o",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Export { input, range, output } => {
                assert_eq!(input, "cache.json");
                assert_eq!(range.start.as_deref(), Some("1/1/2024"));
                assert_eq!(range.end.as_deref(), Some("1/31/2024"));
                assert_eq!(output.output_dir, Some(PathBuf::from("out")));
                assert!(!output.stdout);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_recover_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["txn-export", "-v", "recover", "--stdout"]).unwrap();

        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            Commands::Recover { ref dump, ref output, .. } if dump == "-" && output.stdout
        ));
    }

    #[test]
    fn test_stdout_conflicts_with_output_dir() {
        let result =
            Cli::try_parse_from(["txn-export", "export", "x.json", "--stdout", "-o", "dir"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["txn-export", "preview", "x.json", "-f", "json"]).unwrap();
        assert_eq!(cli.output_format(), Ok(OutputFormat::Json));
    }
}
