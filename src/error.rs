//! Unified error types for bucketdb.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use bucketdb_core::StoreError;
use thiserror::Error;

/// All bucketdb errors.
///
/// This is the canonical error type for all `DataStore` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A single-result query matched nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// A single-result query matched several tuples (duplicate ids)
    #[error("ambiguous result: {0}")]
    AmbiguousResult(String),

    /// A stored tuple lacks an attribute its entity declares
    #[error("missing attribute `{attribute}` in {relation}")]
    MissingAttribute {
        /// Relation being hydrated
        relation: String,
        /// Declared attribute that was absent
        attribute: String,
    },

    /// A stored attribute holds a value of the wrong type
    #[error("wrong type for `{attribute}` in {relation}: expected {expected}, got {actual}")]
    WrongType {
        /// Relation being hydrated
        relation: String,
        /// Offending attribute
        attribute: String,
        /// Expected type
        expected: String,
        /// Actual type found
        actual: String,
    },

    /// Invalid input or configuration
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for bucketdb operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an ambiguous-result error.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Error::AmbiguousResult(_))
    }

    /// Check if this is a serious error.
    ///
    /// Serious errors signal a store/mapper mismatch or an integrity
    /// violation. They are programming errors, not normal outcomes.
    pub fn is_serious(&self) -> bool {
        matches!(
            self,
            Error::AmbiguousResult(_) | Error::MissingAttribute { .. } | Error::WrongType { .. }
        )
    }
}

// Convert from internal store errors
impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { relation, criteria } => {
                Error::NotFound(format!("{} where {}", relation, criteria))
            }
            StoreError::AmbiguousResult {
                relation,
                criteria,
                matches,
            } => Error::AmbiguousResult(format!(
                "{} {} match {}",
                matches, relation, criteria
            )),
            StoreError::MissingAttribute {
                relation,
                attribute,
            } => Error::MissingAttribute {
                relation: relation.to_string(),
                attribute: attribute.to_string(),
            },
            StoreError::WrongType {
                relation,
                attribute,
                expected,
                actual,
            } => Error::WrongType {
                relation: relation.to_string(),
                attribute: attribute.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            StoreError::InvalidInput { message } => Error::InvalidInput(message),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
