//! Storage layer for bucketdb
//!
//! This crate implements the tuple store that backs each relation:
//! - TupleStore: insertion-ordered `Vec` behind a `parking_lot::RwLock`
//! - Linear-scan filtering, bounded retrieval, whole-store clear

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::TupleStore;
