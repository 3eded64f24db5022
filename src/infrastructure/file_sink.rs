//! Writing finished exports to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::{CsvExport, CSV_MIME_TYPE};
use crate::domain::{AppError, Result};

/// Writes an export into `dir` under its suggested file name.
///
/// The directory is created if missing and an existing file of the same
/// name is replaced. Returns the path written.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub fn write_export(dir: &Path, export: &CsvExport) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::io(format!("Failed to create directory {}", dir.display()), e))?;

    let path = dir.join(&export.filename);
    fs::write(&path, export.document.as_bytes())
        .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

    tracing::info!(
        path = %path.display(),
        mime = CSV_MIME_TYPE,
        bytes = export.document.len(),
        "Export written"
    );

    Ok(path)
}
