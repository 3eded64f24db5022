//! Application configuration types.
//!
//! Controls where exported files land and which session-storage keys
//! hold the cached export data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for CSV export output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to (current directory if unset).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Session-storage keys used by the capturing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key holding the JSON-encoded transaction array.
    #[serde(default = "default_transactions_key")]
    pub transactions_key: String,

    /// Key holding the start boundary date.
    #[serde(default = "default_start_date_key")]
    pub start_date_key: String,

    /// Key holding the end boundary date.
    #[serde(default = "default_end_date_key")]
    pub end_date_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            transactions_key: default_transactions_key(),
            start_date_key: default_start_date_key(),
            end_date_key: default_end_date_key(),
        }
    }
}

fn default_transactions_key() -> String {
    "cachedTransactions".to_string()
}

fn default_start_date_key() -> String {
    "startDate".to_string()
}

fn default_end_date_key() -> String {
    "endDate".to_string()
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Export output configuration.
    #[serde(default)]
    pub export: ExportConfig,

    /// Session-storage key configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".txn-export")
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Directory to write exports to, falling back to the working directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.session.transactions_key, "cachedTransactions");
        assert_eq!(config.session.start_date_key, "startDate");
        assert_eq!(config.session.end_date_key, "endDate");
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_session_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [session]
            transactions_key = "txCache"
            "#,
        )
        .unwrap();

        assert_eq!(config.session.transactions_key, "txCache");
        assert_eq!(config.session.end_date_key, "endDate");
        assert!(config.export.output_dir.is_none());
    }

    #[test]
    fn test_default_config_path() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with(".txn-export/config.toml"));
    }
}
