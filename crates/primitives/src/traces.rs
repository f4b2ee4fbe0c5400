//! Traces relation
//!
//! Besides the bucket filter, this relation answers the aggregate questions
//! about a bucket directly from raw tuples, without hydrating entities:
//! how many traces it holds, which type is most common, and the per-type
//! totals. See [`crate::aggregate`] for the tie-break rule.

use crate::aggregate::{TypeCount, TypeCounter};
use crate::entity::{attr, relation};
use crate::relation::attr_eq;
use crate::selection::Selection;
use bucketdb_core::{StoreError, StoreResult, Tuple, Value};
use bucketdb_storage::TupleStore;
use std::sync::Arc;

/// Filters and aggregates over the traces store
#[derive(Debug, Clone)]
pub struct Traces {
    store: Arc<TupleStore>,
}

impl Traces {
    /// Bind to the traces store
    pub fn new(store: Arc<TupleStore>) -> Self {
        Self { store }
    }

    /// Every trace
    pub fn all(&self) -> Selection {
        Selection::all(Arc::clone(&self.store))
    }

    /// Traces in `bucket_id`, in insertion order, optionally bounded
    pub fn in_bucket(&self, bucket_id: &str, limit: Option<usize>) -> Selection {
        let selection = Selection::new(
            Arc::clone(&self.store),
            format!("bucket_id = {:?}", bucket_id),
            attr_eq(attr::BUCKET_ID, bucket_id),
        );
        match limit {
            Some(n) => selection.take(n),
            None => selection,
        }
    }

    /// Number of traces in `bucket_id`
    pub fn count_bucket(&self, bucket_id: &str) -> usize {
        self.in_bucket(bucket_id, None).count()
    }

    /// The type with the most traces in `bucket_id`
    ///
    /// `None` for a bucket without traces.
    pub fn most_common_type(&self, bucket_id: &str) -> StoreResult<Option<String>> {
        Ok(self.tally(bucket_id)?.most_common())
    }

    /// Per-type totals for `bucket_id`, largest first
    pub fn count_types(&self, bucket_id: &str) -> StoreResult<Vec<TypeCount>> {
        Ok(self.tally(bucket_id)?.into_sorted())
    }

    fn tally(&self, bucket_id: &str) -> StoreResult<TypeCounter> {
        let mut counter = TypeCounter::new();
        let mut failure = None;
        self.store.for_each(attr_eq(attr::BUCKET_ID, bucket_id), |t| {
            if failure.is_some() {
                return;
            }
            match trace_type(t) {
                Ok(kind) => counter.record(kind),
                Err(e) => failure = Some(e),
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(counter),
        }
    }
}

/// The `type` attribute of a raw trace tuple
fn trace_type(tuple: &Tuple) -> StoreResult<&str> {
    match tuple.get(attr::TYPE) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(StoreError::WrongType {
            relation: relation::TRACES,
            attribute: attr::TYPE,
            expected: "String",
            actual: other.type_name(),
        }),
        None => Err(StoreError::MissingAttribute {
            relation: relation::TRACES,
            attribute: attr::TYPE,
        }),
    }
}
