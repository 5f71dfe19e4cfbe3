//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in e-commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A persisted cart record does not have the line-item shape.
    #[error("Malformed cart record: {0}")]
    MalformedCartRecord(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(#[from] turbo_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
