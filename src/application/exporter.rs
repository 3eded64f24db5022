//! Export orchestration.
//!
//! Ties filtering and CSV assembly together. The primary export and the
//! session-dump recovery both go through [`run_export`].

use crate::domain::{CachedExportRequest, ExportSummary};

use super::csv_export::build_csv;
use super::filter::filter_by_date_range;

/// MIME type of the exported artifact.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// A finished CSV export, ready to be written somewhere.
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// Suggested file name derived from the boundary dates.
    pub filename: String,
    /// The CSV document.
    pub document: String,
    pub summary: ExportSummary,
    pub start_date: String,
    pub end_date: String,
}

impl CsvExport {
    /// Human-readable one-line summary of what was exported.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Exported {} of {} cached transactions ({} to {})",
            self.summary.included, self.summary.total_cached, self.start_date, self.end_date
        )
    }
}

/// Result of an export attempt.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    /// The cache held no transactions; nothing was produced.
    NoData,
    Exported(CsvExport),
}

/// Derives the download file name from the two boundary texts.
#[must_use]
pub fn export_filename(start: &str, end: &str) -> String {
    format!(
        "cached_transactions_{}_to_{}.csv",
        start.replace('/', "-"),
        end.replace('/', "-")
    )
}

/// Runs the export pipeline over a cached request.
///
/// An empty or absent transaction list yields [`ExportOutcome::NoData`].
/// A window that matches nothing still produces a header-only document.
#[must_use]
pub fn run_export(request: &CachedExportRequest) -> ExportOutcome {
    let transactions = request.transactions();
    if transactions.is_empty() {
        tracing::info!("No cached transactions found");
        return ExportOutcome::NoData;
    }

    let (start, end) = (request.start_date(), request.end_date());
    let filtered = filter_by_date_range(transactions, start, end);
    let document = build_csv(filtered.included.iter().copied());

    let export = CsvExport {
        filename: export_filename(start, end),
        document,
        summary: filtered.summary,
        start_date: start.to_string(),
        end_date: end.to_string(),
    };

    tracing::info!(
        filename = %export.filename,
        bytes = export.document.len(),
        "CSV document assembled"
    );

    ExportOutcome::Exported(export)
}
