//! Error types for storage and API layers.
//!
//! Business outcomes (duplicate id on add, missing id on remove/update,
//! malformed line during load) are not errors: they surface as boolean
//! returns or skip-and-log actions. Errors here are I/O and configuration
//! failures only.

use thiserror::Error;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Top-level errors surfaced to the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
