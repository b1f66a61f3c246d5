//! Error types and result types for document store operations.
//!
//! The repository operations themselves (`save`, `search`, `find_by_id`) are total and
//! never fail. Errors only surface at the JSON boundary.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur at the edges of a document store.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// Serialization/deserialization error when converting to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The caller passed a value the store cannot interpret, such as a null search request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A specialized `Result` type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

impl From<SerdeJsonError> for DocumentStoreError {
    fn from(err: SerdeJsonError) -> Self {
        DocumentStoreError::Serialization(err.to_string())
    }
}
