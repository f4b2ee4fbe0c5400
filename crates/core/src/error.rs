//! Error types for bucketdb
//!
//! Every failure a relation, mapper or command can produce is a
//! [`StoreError`]. None of them are transient: the store is in memory, so
//! there is nothing to retry against.

use thiserror::Error;

/// Errors raised by the storage, relation and mapper layers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A single-result query matched zero tuples
    #[error("not found: no {relation} tuple matches {criteria}")]
    NotFound {
        /// Relation that was queried
        relation: &'static str,
        /// Human-readable description of the filter
        criteria: String,
    },

    /// A single-result query matched more than one tuple
    ///
    /// Ids are generated and unique, so this signals a data-integrity bug
    /// rather than a normal outcome.
    #[error("ambiguous result: {matches} {relation} tuples match {criteria}")]
    AmbiguousResult {
        /// Relation that was queried
        relation: &'static str,
        /// Human-readable description of the filter
        criteria: String,
        /// Number of matching tuples
        matches: usize,
    },

    /// A tuple lacks an attribute the mapper declares
    #[error("missing attribute `{attribute}` while hydrating {relation}")]
    MissingAttribute {
        /// Relation being hydrated
        relation: &'static str,
        /// Declared attribute that was absent
        attribute: &'static str,
    },

    /// A declared attribute holds a value of the wrong type
    #[error("wrong type for `{attribute}` in {relation}: expected {expected}, got {actual}")]
    WrongType {
        /// Relation being hydrated
        relation: &'static str,
        /// Offending attribute
        attribute: &'static str,
        /// Expected value type
        expected: &'static str,
        /// Actual value type found
        actual: &'static str,
    },

    /// Caller-supplied input cannot be used
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },
}

impl StoreError {
    /// Build a `NotFound` error
    pub fn not_found(relation: &'static str, criteria: impl Into<String>) -> Self {
        StoreError::NotFound {
            relation,
            criteria: criteria.into(),
        }
    }

    /// Build an `AmbiguousResult` error
    pub fn ambiguous(relation: &'static str, criteria: impl Into<String>, matches: usize) -> Self {
        StoreError::AmbiguousResult {
            relation,
            criteria: criteria.into(),
            matches,
        }
    }

    /// Build an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            message: message.into(),
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Check if this error signals a store/mapper mismatch or integrity bug
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            StoreError::AmbiguousResult { .. }
                | StoreError::MissingAttribute { .. }
                | StoreError::WrongType { .. }
        )
    }
}

/// Result type for the storage, relation and mapper layers
pub type StoreResult<T> = std::result::Result<T, StoreError>;
