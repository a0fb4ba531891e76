use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Configuration file exists but is not valid JSON.
    #[error("Config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
