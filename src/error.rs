//! Error types for loading, rendering, and publishing command documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library and the CLI.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse command tree {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocError {
    /// Whether the error came from reading or decoding the command tree.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, DocError::Io(_) | DocError::Parse { .. })
    }
}
