//! Configuration file management.
//!
//! Handles loading and creating the TOML configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError, Result};

/// Default configuration file content.
const DEFAULT_CONFIG: &str = r#"# txn-export configuration
# Auto-generated - edit as needed

[export]
# Directory exported CSV files are written to (default: current directory)
# output_dir = "/path/to/exports"

[session]
# Session-storage keys read by `txn-export recover`
transactions_key = "cachedTransactions"
start_date_key = "startDate"
end_date_key = "endDate"
"#;

/// Resolve the config file path, preferring an explicit one.
#[must_use]
pub fn config_file_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(AppConfig::default_config_path, Path::to_path_buf)
}

/// Load configuration from file, or defaults if it doesn't exist.
///
/// # Errors
/// Returns error if file exists but cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let config_path = config_file_path(explicit);

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else if explicit.is_some() {
        Err(AppError::Config {
            message: format!("Config file not found: {}", config_path.display()),
        })
    } else {
        tracing::debug!(path = %config_path.display(), "No config file, using defaults");
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

/// Create the default configuration file if it doesn't exist.
///
/// Returns `true` if a file was written.
///
/// # Errors
/// Returns error if file cannot be created.
pub fn ensure_config_exists(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::io("Failed to create config directory", e))?;
    }

    fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| AppError::io("Failed to create default config", e))?;

    tracing::info!(path = %path.display(), "Created default configuration");

    Ok(true)
}

/// Render a configuration as TOML for display.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| AppError::Config {
        message: format!("Failed to serialize config: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.session.transactions_key, "cachedTransactions");
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_ensure_then_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        assert!(ensure_config_exists(&config_path).unwrap());
        assert!(!ensure_config_exists(&config_path).unwrap());

        let loaded = load_config(Some(&config_path)).unwrap();
        assert_eq!(loaded.session.start_date_key, "startDate");
    }

    #[test]
    fn test_render_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.export.output_dir = Some(dir.path().join("out"));
        config.session.end_date_key = "exportEnd".to_string();

        fs::write(&config_path, render_config(&config).unwrap()).unwrap();
        let loaded = load_config_from_file(&config_path).unwrap();

        assert_eq!(loaded.export.output_dir, config.export.output_dir);
        assert_eq!(loaded.session.end_date_key, "exportEnd");
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(matches!(
            load_config(Some(&missing)),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[export\noutput_dir = ").unwrap();

        assert!(load_config_from_file(&config_path).is_err());
    }
}
