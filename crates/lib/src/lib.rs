//!
//! Collection: ordered key/value collections with a fluent API.
//!
//! ## Core Concepts
//!
//! * **Keys (`collection::Key`)**: Either a positional/explicit integer or a string.
//! * **Values (`collection::Value`)**: A closed sum type for heterogeneous payloads
//!   (null, bool, int, float, text, list, nested map).
//! * **Collections (`collection::Collection`)**: An ordered sequence of unique-keyed
//!   entries. Methods taking `&mut self` change the collection in place; methods
//!   taking `&self` and returning a `Collection` leave the receiver untouched.
//!
//! ```
//! use collection::{Collection, collection};
//!
//! let mut names: Collection = collection!["Bram", "Bram", "John"];
//! names.push("Doe".into());
//!
//! let unique = names.unique();
//! assert_eq!(unique.count(), 3);
//! assert_eq!(names.implode(", ").unwrap(), "Bram, Bram, John, Doe");
//! assert_eq!(names.to_json().unwrap(), r#"["Bram","Bram","John","Doe"]"#);
//! ```

pub mod collection;
pub mod constants;

/// Re-export the core types for easier access.
pub use collection::{Collection, CollectionError, JsonOptions, Key, Number, Pick, Value};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the collection module
    #[error(transparent)]
    Collection(CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error came from a collection operation.
    pub fn is_collection_error(&self) -> bool {
        matches!(self, Error::Collection(_))
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_not_found_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a sampling range failure.
    pub fn is_range_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_range_error(),
            _ => false,
        }
    }

    /// Check if this error is related to JSON encoding or decoding.
    pub fn is_encoding_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Collection(err) => err.is_encoding_error(),
        }
    }
}
