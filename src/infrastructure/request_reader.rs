//! Reading cached export requests from files or stdin.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::domain::{AppError, CachedExportRequest, Result};

/// Source name meaning "read from standard input".
pub const STDIN_SOURCE: &str = "-";

/// Reads the raw text of an input source (a file path, or `-` for stdin).
///
/// # Errors
/// Returns error if the file or stdin cannot be read.
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN_SOURCE {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::io("Failed to read stdin", e))?;
        tracing::debug!(bytes = buf.len(), "Read input from stdin");
        return Ok(buf);
    }

    let path = Path::new(source);
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read {}", path.display()), e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read input file");
    Ok(content)
}

/// Parses a cached export request from JSON text.
///
/// # Errors
/// Returns error if the JSON is malformed or has the wrong shape.
pub fn parse_request(json: &str) -> Result<CachedExportRequest> {
    serde_json::from_str(json).map_err(AppError::json_parse)
}

/// Reads and parses a cached export request from a source.
///
/// # Errors
/// Returns error if the source cannot be read or parsed.
pub fn read_request(source: &str) -> Result<CachedExportRequest> {
    let request = parse_request(&read_source(source)?)?;
    tracing::info!(
        transactions = request.transactions().len(),
        "Loaded cached export request"
    );
    Ok(request)
}
