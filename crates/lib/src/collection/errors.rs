//! Error types for collection operations.
//!
//! Reads never fail: a missing key yields `None` or the caller's default.
//! The errors here come from operations that need a particular shape of
//! value (aggregates, flipping), from sampling, and from JSON encoding.

use thiserror::Error;

/// Structured error types for collection operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A value did not have the shape an operation requires
    #[error("{operation} expected {expected}, found {actual}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// A value taking part in a keyed aggregate has no such field
    #[error("Field not found: {key}")]
    MissingField { key: String },

    /// A value cannot be used as a key
    #[error("Value cannot be used as a key: {actual}")]
    InvalidKey { actual: String },

    /// A sample size outside `1..=available` was requested
    #[error("Requested {requested} items, but the collection holds {available}")]
    OutOfRange { requested: usize, available: usize },

    /// JSON encoding of the collection failed
    #[error("JSON encoding failed: {reason}")]
    EncodingFailed { reason: String },

    /// JSON nesting went past the configured limit
    #[error("Maximum JSON depth of {limit} exceeded (found {depth})")]
    DepthExceeded { limit: usize, depth: usize },
}

impl CollectionError {
    /// Check if this error is a value shape mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            CollectionError::TypeMismatch { .. } | CollectionError::InvalidKey { .. }
        )
    }

    /// Check if this error is related to a missing field
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, CollectionError::MissingField { .. })
    }

    /// Check if this error is a sampling range failure
    pub fn is_range_error(&self) -> bool {
        matches!(self, CollectionError::OutOfRange { .. })
    }

    /// Check if this error is related to JSON encoding
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            CollectionError::EncodingFailed { .. } | CollectionError::DepthExceeded { .. }
        )
    }

    /// Get the operation name if this is a type mismatch
    pub fn operation(&self) -> Option<&str> {
        match self {
            CollectionError::TypeMismatch { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            CollectionError::MissingField { key } => Some(key),
            _ => None,
        }
    }
}

impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
