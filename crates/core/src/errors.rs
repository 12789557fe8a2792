//! Core error types for the Coinstack application.
//!
//! This module defines storage-agnostic error types. Storage-specific
//! errors (file I/O, blob decoding) are converted to these types by the
//! storage layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::trades::TradeError;
use coinstack_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
///
/// Every failure is terminal for the triggering user action: callers
/// surface the message and leave previously committed state untouched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for blob store operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be read or written.
    #[error("Store I/O failed: {0}")]
    Io(String),

    /// A persisted blob could not be encoded or decoded.
    #[error("Blob serialization failed: {0}")]
    Serialization(String),

    /// The requested key or record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(StoreError::Serialization(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
