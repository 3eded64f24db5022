//! Date range filtering over cached transactions.

use crate::domain::{ExportSummary, RawTransaction};

use super::dates::{parse_date, DateRange};

/// Transactions that survived filtering, plus counts for the summary.
#[derive(Debug, Clone)]
pub struct FilteredTransactions<'a> {
    pub included: Vec<&'a RawTransaction>,
    pub summary: ExportSummary,
}

/// Keeps the transactions whose date falls inside `[start, end]`.
///
/// Order is preserved. Transactions without a parseable date are always
/// dropped. If either boundary fails to parse the result is empty; this is
/// logged but not treated as an error.
pub fn filter_by_date_range<'a>(
    transactions: &'a [RawTransaction],
    start: &str,
    end: &str,
) -> FilteredTransactions<'a> {
    let range = DateRange::from_boundaries(start, end);
    let mut summary = ExportSummary {
        total_cached: transactions.len(),
        boundaries_valid: range.is_some(),
        ..Default::default()
    };

    match range {
        Some(r) => tracing::debug!(start = %r.start(), end = %r.end(), "Filtering by date range"),
        None => tracing::warn!(start, end, "Unparseable date range, no transactions will match"),
    }

    let mut included = Vec::new();
    for tx in transactions {
        let Some(instant) = parse_date(&tx.date_text()) else {
            tracing::debug!(date = %tx.date_text(), "Excluding transaction without a usable date");
            summary.excluded_undated += 1;
            continue;
        };

        if range.is_some_and(|r| r.contains(instant)) {
            included.push(tx);
        } else {
            tracing::debug!(%instant, "Excluding transaction outside range");
            summary.excluded_out_of_range += 1;
        }
    }

    summary.included = included.len();

    tracing::info!(
        "Filtered {} of {} cached transactions",
        summary.included,
        summary.total_cached
    );

    FilteredTransactions { included, summary }
}
