//! Relations, mappers and commands for bucketdb
//!
//! ## Layers
//!
//! - **Relations** ([`Accounts`], [`Buckets`], [`Traces`]) return lazy
//!   [`Selection`]s over raw tuples and answer aggregate questions
//! - **Mapper** turns a tuple into an immutable [`Entity`]
//! - **Commands** ([`CreateCommand`], [`ClearCommand`]) are the only writers
//!
//! [`Stores`], [`Relations`] and [`Commands`] bind everything to one set
//! of tuple stores at construction time.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accounts;
pub mod aggregate;
pub mod buckets;
pub mod command;
pub mod entity;
pub mod mapper;
pub mod relation;
pub mod selection;
pub mod traces;

pub use accounts::Accounts;
pub use aggregate::{TypeCount, TypeCounter};
pub use buckets::Buckets;
pub use command::{ClearCommand, CommandSet, Commands, CreateCommand};
pub use entity::{attr, Account, Bucket, TraceLog};
pub use mapper::{Attributes, Entity, Mapper};
pub use relation::{Relations, Stores};
pub use selection::Selection;
pub use traces::Traces;
