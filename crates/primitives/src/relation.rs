//! Relation registry
//!
//! A relation is a typed filter vocabulary over one tuple store. The
//! registry resolves one handle per relation at construction time, so
//! callers reach a relation through a field rather than a name lookup.

use crate::accounts::Accounts;
use crate::buckets::Buckets;
use crate::entity::relation;
use crate::traces::Traces;
use bucketdb_core::Tuple;
use bucketdb_storage::TupleStore;
use std::sync::Arc;

/// Exact string equality on one attribute
///
/// Tuples lacking the attribute, or holding a non-string, never match.
pub(crate) fn attr_eq(
    attribute: &'static str,
    expected: impl Into<String>,
) -> impl Fn(&Tuple) -> bool + Send + Sync + 'static {
    let expected = expected.into();
    move |t| t.get_str(attribute) == Some(expected.as_str())
}

/// The three tuple stores, one per relation
#[derive(Debug, Clone)]
pub struct Stores {
    /// Accounts tuples
    pub accounts: Arc<TupleStore>,
    /// Buckets tuples
    pub buckets: Arc<TupleStore>,
    /// Traces tuples
    pub traces: Arc<TupleStore>,
}

impl Stores {
    /// Create three empty stores
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(TupleStore::new(relation::ACCOUNTS)),
            buckets: Arc::new(TupleStore::new(relation::BUCKETS)),
            traces: Arc::new(TupleStore::new(relation::TRACES)),
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

/// One typed handle per relation
#[derive(Debug, Clone)]
pub struct Relations {
    /// Accounts relation
    pub accounts: Accounts,
    /// Buckets relation
    pub buckets: Buckets,
    /// Traces relation
    pub traces: Traces,
}

impl Relations {
    /// Bind relation handles to `stores`
    pub fn bind(stores: &Stores) -> Self {
        Self {
            accounts: Accounts::new(Arc::clone(&stores.accounts)),
            buckets: Buckets::new(Arc::clone(&stores.buckets)),
            traces: Traces::new(Arc::clone(&stores.traces)),
        }
    }
}
