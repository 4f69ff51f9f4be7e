//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Field-level validation errors live in
//! [`crate::domain::errors`].

use thiserror::Error;

/// Errors that can occur while saving or loading the address book.
///
/// Validation failures during a load (a stored phone or birthday that no
/// longer passes validation) surface through the `Json` variant, carrying
/// the validation message.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be parsed or re-validated
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
