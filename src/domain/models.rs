//! Domain models for cached transaction data.
//!
//! These models mirror the records a page scraper leaves in session storage:
//! loosely typed, camelCase, with any field possibly missing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value as it appeared in the scraped JSON.
///
/// Amounts in particular arrive either as text (`"-4.50"`) or as bare
/// numbers (`-4.5`), depending on which page produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => {
                if let Some(i) = n.as_i64() {
                    write!(f, "{i}")
                } else if let Some(u) = n.as_u64() {
                    write!(f, "{u}")
                } else {
                    f.write_str(&js_number_text(n.as_f64().unwrap_or_default()))
                }
            }
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Renders a float the way a browser's `String(number)` does.
///
/// Plain decimal between 1e-6 and 1e21, exponent form (`1e+21`, `1.5e-7`)
/// outside it. f64 Display already drops a trailing ".0".
fn js_number_text(x: f64) -> String {
    let magnitude = x.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{x}");
    }

    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Renders an optional field as text, treating absent/null as empty.
fn field_text(value: Option<&FieldValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// A single scraped transaction row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Free-form date text; blank means the transaction is still pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<FieldValue>,
}

impl RawTransaction {
    /// Build a transaction from text fields.
    #[cfg(test)]
    #[must_use]
    pub fn new(
        date: &str,
        description: &str,
        amount: &str,
        category: &str,
        transaction_type: &str,
    ) -> Self {
        Self {
            date: Some(date.into()),
            description: Some(description.into()),
            amount: Some(amount.into()),
            category: Some(category.into()),
            transaction_type: Some(transaction_type.into()),
        }
    }

    #[must_use]
    pub fn date_text(&self) -> String {
        field_text(self.date.as_ref())
    }

    #[must_use]
    pub fn description_text(&self) -> String {
        field_text(self.description.as_ref())
    }

    #[must_use]
    pub fn amount_text(&self) -> String {
        field_text(self.amount.as_ref())
    }

    #[must_use]
    pub fn category_text(&self) -> String {
        field_text(self.category.as_ref())
    }

    #[must_use]
    pub fn transaction_type_text(&self) -> String {
        field_text(self.transaction_type.as_ref())
    }
}

/// Cached transactions plus the date window requested for export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedExportRequest {
    #[serde(default)]
    pub transactions: Option<Vec<RawTransaction>>,
    /// Inclusive lower bound, `M/D/YYYY`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive upper bound, `M/D/YYYY`.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl CachedExportRequest {
    /// Create a request from transactions and boundary texts.
    #[cfg(test)]
    #[must_use]
    pub fn new(
        transactions: Vec<RawTransaction>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            transactions: Some(transactions),
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }

    /// Cached transactions; absent is the same as empty.
    #[must_use]
    pub fn transactions(&self) -> &[RawTransaction] {
        self.transactions.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn start_date(&self) -> &str {
        self.start_date.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn end_date(&self) -> &str {
        self.end_date.as_deref().unwrap_or_default()
    }

    /// Replace the cached boundaries with any explicitly supplied ones.
    #[must_use]
    pub fn with_boundaries(mut self, start: Option<String>, end: Option<String>) -> Self {
        if start.is_some() {
            self.start_date = start;
        }
        if end.is_some() {
            self.end_date = end;
        }
        self
    }
}

/// Counts describing one filtering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Transactions present in the cache.
    pub total_cached: usize,
    /// Transactions inside the requested window.
    pub included: usize,
    /// Transactions with blank or unparseable dates.
    pub excluded_undated: usize,
    /// Dated transactions outside the window (all of them if the window is invalid).
    pub excluded_out_of_range: usize,
    /// Whether both boundary dates parsed.
    pub boundaries_valid: bool,
}
