//! Infrastructure layer - external adapters (filesystem, stdin, config).
//!
//! This layer handles all I/O operations around the export pipeline.

pub mod config;
pub mod file_sink;
pub mod request_reader;
pub mod session_storage;

pub use config::{config_file_path, ensure_config_exists, load_config, render_config};
pub use file_sink::write_export;
pub use request_reader::{read_request, read_source};
pub use session_storage::decode_storage_dump;
