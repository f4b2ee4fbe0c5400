//! Convenient imports for bucketdb.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use bucketdb::prelude::*;
//!
//! let store = DataStore::new();
//! store.setup()?;
//! # Ok::<(), bucketdb::Error>(())
//! ```

// Main entry point
pub use crate::database::{DataStore, DataStoreBuilder};
pub use crate::config::StoreConfig;

// Error handling
pub use crate::error::{Error, Result};

// Data model
pub use crate::types::{attr, Account, Bucket, TraceLog, Tuple, TypeCount, Value};

// Views
pub use crate::views::{BucketInfo, BucketSummary};

// Re-export serde_json for convenience
pub use serde_json::json;
