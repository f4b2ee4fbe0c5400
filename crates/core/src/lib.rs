//! Core types for bucketdb
//!
//! This crate defines the types shared by every layer:
//! - [`Value`]: dynamically typed attribute value
//! - [`Tuple`]: untyped record held by a tuple store
//! - [`StoreError`]: failure taxonomy for queries and hydration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod tuple;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use tuple::{Tuple, ID_ATTRIBUTE};
pub use value::{serialize_as_json, Value};
