//! # bucketdb
//!
//! Embedded in-memory store for accounts, buckets and the trace logs
//! collected in each bucket.
//!
//! bucketdb exposes a command/query interface over one relation per record
//! kind. Callers hand in untyped [`Tuple`]s and get back immutable entities
//! ([`Account`], [`Bucket`], [`TraceLog`]) or aggregation views
//! ([`BucketInfo`], [`BucketSummary`], [`TypeCount`]). The tuple stores
//! themselves are never exposed.
//!
//! ## Quick Start
//!
//! ```
//! use bucketdb::prelude::*;
//!
//! let store = DataStore::new();
//! let account = store.create_account(
//!     Tuple::new().with("email", "dev@example.com").with("password", "hunter2"),
//! )?;
//!
//! let bucket = store.create_bucket(
//!     account.id(),
//!     Tuple::from_json(json!({
//!         "type": "web", "message": "frontend", "trace": "", "context": null
//!     }))?,
//! )?;
//! let bucket_id = bucket.id().unwrap_or_default();
//!
//! for kind in ["TypeError", "TypeError", "RangeError"] {
//!     store.add_trace(bucket_id, Tuple::from_json(json!({
//!         "type": kind, "message": "boom", "trace": "app.js:1", "context": {}
//!     }))?)?;
//! }
//!
//! let infos = store.buckets(account.id())?;
//! assert_eq!(infos[0].total(), 3);
//! assert_eq!(infos[0].most_common_type(), Some("TypeError"));
//! # Ok::<(), bucketdb::Error>(())
//! ```
//!
//! ## Layers
//!
//! - `bucketdb-core` - [`Value`], [`Tuple`], store errors
//! - `bucketdb-storage` - tuple stores
//! - `bucketdb-primitives` - relations, mapper, commands
//! - `bucketdb` - the [`DataStore`] facade and aggregation views

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod database;
mod error;
mod types;
mod views;

pub mod prelude;

// Re-export main entry points
pub use config::{StoreConfig, DEFAULT_SUMMARY_LIMIT};
pub use database::{DataStore, DataStoreBuilder, StoreMetrics};
pub use error::{Error, Result};

// Re-export views
pub use views::{BucketInfo, BucketSummary};

// Re-export types
pub use types::*;
