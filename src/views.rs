//! Aggregation views.
//!
//! These are read-only structures the store computes from several
//! relations at query time. They are never persisted and own copies of
//! everything they show.

use crate::types::{Bucket, TraceLog, TypeCount, Value};
use serde::Serialize;
use std::ops::Deref;

/// A bucket plus its trace statistics.
///
/// Wraps the [`Bucket`] by composition. Bucket fields are reachable through
/// the forwarding accessors or through `Deref`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketInfo {
    bucket: Bucket,
    total: usize,
    most_common_type: Option<String>,
}

impl BucketInfo {
    /// Assemble from a bucket and its statistics.
    pub fn new(bucket: Bucket, total: usize, most_common_type: Option<String>) -> Self {
        Self {
            bucket,
            total,
            most_common_type,
        }
    }

    /// The wrapped bucket.
    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    /// Number of traces in the bucket.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Type with the most traces, `None` when the bucket is empty.
    pub fn most_common_type(&self) -> Option<&str> {
        self.most_common_type.as_deref()
    }

    /// Bucket id.
    pub fn id(&self) -> &str {
        self.bucket.id()
    }

    /// Owning account id.
    pub fn account_id(&self) -> &str {
        self.bucket.account_id()
    }

    /// Bucket type tag.
    pub fn bucket_type(&self) -> &str {
        self.bucket.bucket_type()
    }

    /// Bucket message.
    pub fn message(&self) -> &Value {
        self.bucket.message()
    }

    /// Bucket trace.
    pub fn trace(&self) -> &Value {
        self.bucket.trace()
    }

    /// Bucket context.
    pub fn context(&self) -> &Value {
        self.bucket.context()
    }

    /// Unwrap into the bucket.
    pub fn into_bucket(self) -> Bucket {
        self.bucket
    }
}

impl Deref for BucketInfo {
    type Target = Bucket;

    fn deref(&self) -> &Bucket {
        &self.bucket
    }
}

/// A bucket, a bounded list of its traces, and per-type totals.
///
/// `counts` always covers every trace in the bucket, even when `traces`
/// was truncated by the summary limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    /// The bucket
    pub bucket: Bucket,
    /// Traces in insertion order, at most the requested limit
    pub traces: Vec<TraceLog>,
    /// Per-type totals, largest first
    pub counts: Vec<TypeCount>,
}
