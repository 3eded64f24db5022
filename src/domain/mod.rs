//! Domain layer - core types for cached transaction export.
//!
//! This layer contains pure domain models, configuration types and
//! error types without any IO.

pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, SessionConfig};
pub use error::{AppError, Result};
pub use models::{CachedExportRequest, ExportSummary, RawTransaction};
