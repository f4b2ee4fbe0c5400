//! Public types for the bucketdb API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Raw data model
pub use bucketdb_core::{Tuple, Value};

// Entities
pub use bucketdb_primitives::{Account, Bucket, TraceLog};

// Aggregation
pub use bucketdb_primitives::TypeCount;

// Attribute names, for building tuples
pub use bucketdb_primitives::attr;
