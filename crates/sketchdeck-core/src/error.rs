//! Core error types for sketchdeck-core.
//!
//! This module defines the error hierarchy using thiserror. Playback itself
//! never fails; errors come from the boundaries (image loading, settings
//! validation, configuration files and the history recorder).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sketchdeck-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// History recorder errors
    #[error("History error: {0}")]
    History(#[from] HistoryError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Image acquisition errors
    #[error("Image load error: {0}")]
    ImageLoad(#[from] ImageLoadError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// History persistence errors.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Failed to open the history database
    #[error("Failed to open history database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No history entry with the given id
    #[error("History entry not found: {0}")]
    NotFound(String),

    /// Database is locked
    #[error("History database is locked")]
    Locked,

    /// Stored image lists could not be encoded or decoded
    #[error("Failed to encode history entry: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must be strictly positive
    #[error("'{field}' must be greater than zero")]
    NotPositive { field: String },
}

/// Image acquisition errors.
///
/// A failed load never yields a partial image set.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    /// Path does not exist
    #[error("Image path not found: {0}")]
    NotFound(PathBuf),

    /// Path exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed
    #[error("Failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Nothing usable was found
    #[error("No images found")]
    NoImages,
}

impl From<rusqlite::Error> for HistoryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg) if e.code == rusqlite::ErrorCode::DatabaseBusy => {
                HistoryError::Locked
            }
            rusqlite::Error::SqliteFailure(e, _msg) if e.code == rusqlite::ErrorCode::DatabaseLocked => {
                HistoryError::Locked
            }
            _ => HistoryError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
