//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading results and computing statistics
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Cannot read input {path}: {source}")]
    InputSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config TOML parse error: {0}")]
    ConfigParseFailed(#[from] toml::de::Error),
}

impl StatsError {
    /// Wrap an I/O failure on `path` as an input source error
    pub fn input_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StatsError::InputSource {
            path: path.into(),
            source,
        }
    }

    /// True for errors that make a single input line unusable
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            StatsError::MalformedRecord { .. } | StatsError::InvalidInput(_)
        )
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
