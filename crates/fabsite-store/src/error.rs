//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing file.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to write the backing file.
    #[error("Store write failed: {0}")]
    WriteError(#[from] std::io::Error),

    /// The backing storage refused the operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
