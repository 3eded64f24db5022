//! Output formatting for previews and summaries.
//!
//! Supports multiple output formats: table, JSON, and raw CSV.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{ExportSummary, RawTransaction};

use super::csv_export::build_csv;
use super::dates::format_export_date;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact table listing.
    #[default]
    Table,
    /// JSON format for programmatic use.
    Json,
    /// The CSV document itself.
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown format: {s}. Use: table, json, csv")),
        }
    }
}

/// Formats filtered transactions in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn format_transactions(
    transactions: &[&RawTransaction],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(format_transactions_table(transactions)),
        OutputFormat::Json => serde_json::to_string_pretty(transactions),
        OutputFormat::Csv => Ok(build_csv(transactions.iter().copied())),
    }
}

/// Formats a table listing of transactions, dates as they will be exported.
pub fn format_transactions_table(transactions: &[&RawTransaction]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Date",
        "Description",
        "Amount",
        "Category",
        "Transaction Type",
    ]);

    for tx in transactions {
        table.add_row(vec![
            format_export_date(&tx.date_text()),
            truncate(&tx.description_text(), 40),
            tx.amount_text(),
            truncate(&tx.category_text(), 24),
            tx.transaction_type_text(),
        ]);
    }

    table.to_string()
}

/// Formats filtering statistics for display.
pub fn format_summary(summary: &ExportSummary) -> String {
    let range_note = if summary.boundaries_valid {
        "valid".green()
    } else {
        "unparseable (nothing matches)".red()
    };

    format!(
        "{}\n  Cached transactions: {}\n  Included: {}\n  Excluded (no date): {}\n  Excluded (out of range): {}\n  Date range: {}",
        "📊 Statistics".bold(),
        summary.total_cached.to_string().cyan(),
        summary.included.to_string().green(),
        summary.excluded_undated.to_string().yellow(),
        summary.excluded_out_of_range.to_string().yellow(),
        range_note
    )
}

/// Truncates a string to max length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.lines().next().unwrap_or(s);
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{cut}...")
    }
}
