//! Domain entities
//!
//! Accounts, buckets and trace logs are immutable value objects. They are
//! built fresh by a [`Mapper`](crate::mapper::Mapper) on every query and
//! never written back; a later query simply hydrates a new value.

use crate::mapper::{Attributes, Entity};
use bucketdb_core::{serialize_as_json, StoreResult, Value};
use serde::Serialize;

/// Attribute names shared by tuples and entities
pub mod attr {
    /// Generated identifier
    pub const ID: &str = bucketdb_core::ID_ATTRIBUTE;
    /// Account email (matched case-insensitively)
    pub const EMAIL: &str = "email";
    /// Account password (opaque)
    pub const PASSWORD: &str = "password";
    /// Owning account of a bucket
    pub const ACCOUNT_ID: &str = "account_id";
    /// Owning bucket of a trace
    pub const BUCKET_ID: &str = "bucket_id";
    /// Classification tag used for aggregation
    pub const TYPE: &str = "type";
    /// Free-text message
    pub const MESSAGE: &str = "message";
    /// Stack trace or similar diagnostic text
    pub const TRACE: &str = "trace";
    /// Arbitrary structured context
    pub const CONTEXT: &str = "context";
}

/// Relation names
pub mod relation {
    /// Accounts relation
    pub const ACCOUNTS: &str = "accounts";
    /// Buckets relation
    pub const BUCKETS: &str = "buckets";
    /// Traces relation
    pub const TRACES: &str = "traces";
}

// =============================================================================
// Account
// =============================================================================

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: String,
    email: String,
    password: String,
}

impl Account {
    /// Generated identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Email exactly as it was stored
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Opaque password string
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Entity for Account {
    const RELATION: &'static str = relation::ACCOUNTS;
    const ATTRIBUTES: &'static [&'static str] = &[attr::ID, attr::EMAIL, attr::PASSWORD];

    fn from_attributes(mut attributes: Attributes) -> StoreResult<Self> {
        Ok(Self {
            id: attributes.string(attr::ID)?,
            email: attributes.string(attr::EMAIL)?,
            password: attributes.string(attr::PASSWORD)?,
        })
    }
}

// =============================================================================
// Bucket
// =============================================================================

/// A bucket of trace logs owned by an account
///
/// `account_id` is not checked against the accounts relation; a bucket may
/// reference an account that does not exist. `message`, `trace` and
/// `context` are carried without constraint on their type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    id: String,
    account_id: String,
    #[serde(rename = "type")]
    bucket_type: String,
    #[serde(serialize_with = "serialize_as_json")]
    message: Value,
    #[serde(serialize_with = "serialize_as_json")]
    trace: Value,
    #[serde(serialize_with = "serialize_as_json")]
    context: Value,
}

impl Bucket {
    /// Generated identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Owning account id
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Descriptive type tag
    pub fn bucket_type(&self) -> &str {
        &self.bucket_type
    }

    /// Descriptive message, stored as given
    pub fn message(&self) -> &Value {
        &self.message
    }

    /// Descriptive trace, stored as given
    pub fn trace(&self) -> &Value {
        &self.trace
    }

    /// Arbitrary context value
    pub fn context(&self) -> &Value {
        &self.context
    }
}

impl Entity for Bucket {
    const RELATION: &'static str = relation::BUCKETS;
    const ATTRIBUTES: &'static [&'static str] = &[
        attr::ID,
        attr::ACCOUNT_ID,
        attr::TYPE,
        attr::MESSAGE,
        attr::TRACE,
        attr::CONTEXT,
    ];

    fn from_attributes(mut attributes: Attributes) -> StoreResult<Self> {
        Ok(Self {
            id: attributes.string(attr::ID)?,
            account_id: attributes.string(attr::ACCOUNT_ID)?,
            bucket_type: attributes.string(attr::TYPE)?,
            message: attributes.value(attr::MESSAGE)?,
            trace: attributes.value(attr::TRACE)?,
            context: attributes.value(attr::CONTEXT)?,
        })
    }
}

// =============================================================================
// TraceLog
// =============================================================================

/// One trace log entry inside a bucket
///
/// Only `type` must be a string, since traces are grouped by it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceLog {
    id: String,
    bucket_id: String,
    #[serde(rename = "type")]
    trace_type: String,
    #[serde(serialize_with = "serialize_as_json")]
    message: Value,
    #[serde(serialize_with = "serialize_as_json")]
    trace: Value,
    #[serde(serialize_with = "serialize_as_json")]
    context: Value,
}

impl TraceLog {
    /// Generated identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Owning bucket id
    pub fn bucket_id(&self) -> &str {
        &self.bucket_id
    }

    /// Classification tag
    pub fn trace_type(&self) -> &str {
        &self.trace_type
    }

    /// Log message, usually a string
    pub fn message(&self) -> &Value {
        &self.message
    }

    /// Stack trace, usually a string
    pub fn trace(&self) -> &Value {
        &self.trace
    }

    /// Arbitrary context value
    pub fn context(&self) -> &Value {
        &self.context
    }
}

impl Entity for TraceLog {
    const RELATION: &'static str = relation::TRACES;
    const ATTRIBUTES: &'static [&'static str] = &[
        attr::ID,
        attr::BUCKET_ID,
        attr::TYPE,
        attr::MESSAGE,
        attr::TRACE,
        attr::CONTEXT,
    ];

    fn from_attributes(mut attributes: Attributes) -> StoreResult<Self> {
        Ok(Self {
            id: attributes.string(attr::ID)?,
            bucket_id: attributes.string(attr::BUCKET_ID)?,
            trace_type: attributes.string(attr::TYPE)?,
            message: attributes.value(attr::MESSAGE)?,
            trace: attributes.value(attr::TRACE)?,
            context: attributes.value(attr::CONTEXT)?,
        })
    }
}
