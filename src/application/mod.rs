//! Application layer - the export pipeline and its presentation.
//!
//! Date parsing, range filtering, CSV assembly and the export
//! orchestration shared by every entry point.

pub mod csv_export;
pub mod dates;
pub mod exporter;
pub mod filter;
pub mod formatter;

pub use exporter::{run_export, CsvExport, ExportOutcome, CSV_MIME_TYPE};
pub use filter::filter_by_date_range;
pub use formatter::{format_summary, format_transactions, OutputFormat};
