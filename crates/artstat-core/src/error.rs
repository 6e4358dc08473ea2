//! Error types for artstat core operations.
//!
//! Library-level failures are modelled with `thiserror`; the CLI wraps them
//! with `anyhow`. Query-time problems (missing names, no matches) are not
//! errors at all and never show up here: they are ordinary query reports.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ArtstatError
pub type Result<T> = std::result::Result<T, ArtstatError>;

/// Core error types for artstat operations.
#[derive(Error, Debug)]
pub enum ArtstatError {
    // === Loader Errors ===
    /// The record directory is missing, not a directory, or cannot be listed
    #[error("record directory {path} is unreadable: {reason}")]
    RecordDirUnreadable { path: PathBuf, reason: String },

    /// A single record file could not be read or decoded
    #[error("record {path} is unreadable: {reason}")]
    RecordUnreadable { path: PathBuf, reason: String },

    /// The record file pattern is not a valid glob
    #[error("invalid record pattern: {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // === Configuration Errors ===
    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArtstatError {
    /// Create a record-directory error
    pub fn record_dir(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ArtstatError::RecordDirUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a per-record error
    pub fn record(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ArtstatError::RecordUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
