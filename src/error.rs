//! Error types for collection construction and JSON conversion.

use thiserror::Error;

/// Result type alias for fallible collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Errors raised by a [`Collection`](crate::Collection)
#[derive(Error, Debug)]
pub enum CollectionError {
    /// Input cannot be read as a sequence or a keyed mapping
    #[error("Invalid argument: expected a sequence or keyed mapping, found {found}")]
    InvalidArgument {
        /// Kind of value that was supplied
        found: String,
    },

    /// A value could not be converted to or from JSON text
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CollectionError {
    /// Creates an `InvalidArgument` error naming what was found.
    pub(crate) fn invalid_argument(found: impl Into<String>) -> Self {
        CollectionError::InvalidArgument {
            found: found.into(),
        }
    }
}
