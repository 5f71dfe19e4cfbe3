//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// The storage medium cannot be reached (disabled, quota, prerendering).
    #[error("Storage medium unavailable: {0}")]
    Unavailable(String),

    /// Failed to perform store operation.
    #[error("Store operation failed on {key}: {reason}")]
    StoreError { key: String, reason: String },

    /// Key is not usable as a slot name.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

impl CacheError {
    pub(crate) fn store(key: &str, reason: impl ToString) -> Self {
        CacheError::StoreError {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
