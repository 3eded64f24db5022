//! CSV document assembly.
//!
//! Rows follow the import layout of common budgeting tools: five quoted
//! data fields followed by three empty columns the scraped data never fills.

use crate::domain::RawTransaction;

use super::dates::format_export_date;

/// Fixed header line of every exported document.
pub const CSV_HEADER: &str =
    "Date,Description,Amount,Category,Transaction Type,Account Name,Labels,Notes";

/// Escapes text for use inside a double-quoted CSV field.
///
/// Only quote characters are doubled. Commas and line breaks are safe
/// because the caller always wraps the field in quotes.
#[must_use]
pub fn escape_field(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Formats one transaction as a CSV line, including the trailing newline.
#[must_use]
pub fn format_row(tx: &RawTransaction) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",,,\n",
        escape_field(&format_export_date(&tx.date_text())),
        escape_field(&tx.description_text()),
        escape_field(&tx.amount_text()),
        escape_field(&tx.category_text()),
        escape_field(&tx.transaction_type_text()),
    )
}

/// Builds the full CSV document: header line, then one line per transaction.
pub fn build_csv<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a RawTransaction>,
{
    let mut out = String::with_capacity(CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for tx in transactions {
        out.push_str(&format_row(tx));
    }

    out
}
