//! Error types for the akun-core library.
//!
//! Parsing a batch never fails; these errors cover the surrounding surface
//! (configuration files and strict conversions of single values).

use thiserror::Error;

/// Main error type for the akun library.
#[derive(Error, Debug)]
pub enum AkunError {
    /// A single field could not be converted.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to converting a single value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Not a domestic mobile number after normalization.
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    /// Not a canonical `YYYY-MM-DD` date within the accepted ranges.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for the akun library.
pub type Result<T> = std::result::Result<T, AkunError>;
