//! Decoding of browser session-storage dumps.
//!
//! A dump is the object printed by `JSON.stringify(sessionStorage)`: every
//! value is a string, and the transaction list is itself JSON encoded
//! inside that string.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::{AppError, CachedExportRequest, RawTransaction, Result, SessionConfig};

/// Builds a cached export request from a session-storage dump.
///
/// A missing transactions key is not an error; it yields a request with no
/// transactions, which the exporter reports as "no data".
///
/// # Errors
/// Returns error if the dump is not a JSON object, or if the transactions
/// value is present but is not a transaction array.
pub fn decode_storage_dump(json: &str, keys: &SessionConfig) -> Result<CachedExportRequest> {
    let dump: HashMap<String, Value> = serde_json::from_str(json).map_err(AppError::json_parse)?;

    tracing::debug!(keys = dump.len(), "Decoded session-storage dump");

    let transactions = match dump.get(&keys.transactions_key) {
        None | Some(Value::Null) => {
            tracing::info!(
                key = %keys.transactions_key,
                "No cached transactions in session storage"
            );
            None
        }
        Some(Value::String(encoded)) => decode_transactions(encoded, &keys.transactions_key)?,
        Some(value @ Value::Array(_)) => Some(
            serde_json::from_value(value.clone())
                .map_err(|e| invalid_transactions(&keys.transactions_key, &e))?,
        ),
        Some(_) => {
            return Err(AppError::InvalidData {
                message: format!(
                    "Value under '{}' is not a transaction array",
                    keys.transactions_key
                ),
            })
        }
    };

    Ok(CachedExportRequest {
        transactions,
        start_date: dump.get(&keys.start_date_key).and_then(string_value),
        end_date: dump.get(&keys.end_date_key).and_then(string_value),
    })
}

fn decode_transactions(encoded: &str, key: &str) -> Result<Option<Vec<RawTransaction>>> {
    serde_json::from_str(encoded).map_err(|e| invalid_transactions(key, &e))
}

fn invalid_transactions(key: &str, err: &serde_json::Error) -> AppError {
    AppError::InvalidData {
        message: format!("Value under '{key}' is not a transaction array: {err}"),
    }
}

/// Reads a stored boundary value.
///
/// Pages store dates either raw (`1/1/2024`) or JSON encoded
/// (`"\"1/1/2024\""`); both come back as the bare text.
fn string_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(
            serde_json::from_str::<String>(s).unwrap_or_else(|_| s.clone()),
        ),
        other => Some(other.to_string()),
    }
}
