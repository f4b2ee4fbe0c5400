//! Buckets relation

use crate::entity::attr;
use crate::relation::attr_eq;
use crate::selection::Selection;
use bucketdb_storage::TupleStore;
use std::sync::Arc;

/// Filters over the buckets store
#[derive(Debug, Clone)]
pub struct Buckets {
    store: Arc<TupleStore>,
}

impl Buckets {
    /// Bind to the buckets store
    pub fn new(store: Arc<TupleStore>) -> Self {
        Self { store }
    }

    /// Every bucket
    pub fn all(&self) -> Selection {
        Selection::all(Arc::clone(&self.store))
    }

    /// Buckets with the given id
    pub fn with_id(&self, id: &str) -> Selection {
        Selection::new(
            Arc::clone(&self.store),
            format!("id = {:?}", id),
            attr_eq(attr::ID, id),
        )
    }

    /// Buckets owned by `account_id`, in insertion order
    pub fn for_account(&self, account_id: &str) -> Selection {
        Selection::new(
            Arc::clone(&self.store),
            format!("account_id = {:?}", account_id),
            attr_eq(attr::ACCOUNT_ID, account_id),
        )
    }
}
