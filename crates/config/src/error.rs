//! Error types for configuration operations.

use std::path::PathBuf;

use projhub_core::{Status, ValidationError};

/// Errors that can occur while reading or writing configuration and
/// snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 content.
    #[error("failed to parse {path}: {source}")]
    ParseJson5 {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json5::Error,
    },

    /// Failed to serialize to JSON.
    #[error("failed to serialize: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A progress default is above 100.
    #[error("progress default for {status} is {value}%, expected 0-100")]
    InvalidProgress {
        /// The status whose default is invalid.
        status: Status,
        /// The rejected value.
        value: u8,
    },

    /// A snapshot file parsed but its content is inconsistent.
    #[error("invalid snapshot {path}: {source}")]
    InvalidSnapshot {
        /// The snapshot file.
        path: PathBuf,
        /// The validation failure.
        #[source]
        source: ValidationError,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
