//! Storage-specific error types for the local blob store.
//!
//! This module provides error types that wrap filesystem and JSON
//! errors and convert them to the storage-agnostic error types defined
//! in `coinstack_core`.

use thiserror::Error;

use coinstack_core::errors::{Error, StoreError};

/// Storage-specific errors that wrap io and serde types.
///
/// These errors are internal to the storage layer and are converted to
/// `coinstack_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store file access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blob encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Store location unavailable: {0}")]
    Unavailable(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Store(StoreError::Io(e.to_string())),
            StorageError::Serialization(e) => {
                Error::Store(StoreError::Serialization(e.to_string()))
            }
            StorageError::KeyNotFound(key) => Error::Store(StoreError::NotFound(key)),
            StorageError::Unavailable(e) => Error::Store(StoreError::Internal(e)),
        }
    }
}
