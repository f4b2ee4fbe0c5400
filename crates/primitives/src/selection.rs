//! Lazy filtered views over a tuple store
//!
//! Every relation filter returns a [`Selection`]. Nothing is scanned until a
//! terminal operation runs, and every terminal operation scans again, so a
//! selection always reflects the store as it is at call time.
//!
//! ## Terminal operations
//!
//! | Operation | Zero matches | One match | Many matches |
//! |-----------|--------------|-----------|--------------|
//! | `to_vec` | empty | `[t]` | all |
//! | `first` | `None` | `Some(t)` | `Some(first)` |
//! | `one` | `None` | `Some(t)` | `AmbiguousResult` |
//! | `one_required` | `NotFound` | `t` | `AmbiguousResult` |

use crate::mapper::{Entity, Mapper};
use bucketdb_core::{StoreError, StoreResult, Tuple};
use bucketdb_storage::TupleStore;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

type Predicate = Arc<dyn Fn(&Tuple) -> bool + Send + Sync>;

/// A lazy, re-evaluable filter over one tuple store
#[derive(Clone)]
pub struct Selection {
    store: Arc<TupleStore>,
    predicate: Predicate,
    /// Description of the filter for error messages
    criteria: String,
    limit: Option<usize>,
}

impl Selection {
    /// Select the tuples of `store` matching `predicate`
    pub fn new<P>(store: Arc<TupleStore>, criteria: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&Tuple) -> bool + Send + Sync + 'static,
    {
        Self {
            store,
            predicate: Arc::new(predicate),
            criteria: criteria.into(),
            limit: None,
        }
    }

    /// Select every tuple in `store`
    pub fn all(store: Arc<TupleStore>) -> Self {
        Self::new(store, "all", |_| true)
    }

    /// Bound the selection to its first `n` matches
    ///
    /// Bounds compose: the smaller limit wins.
    pub fn take(mut self, n: usize) -> Self {
        self.limit = Some(self.limit.map_or(n, |l| l.min(n)));
        self
    }

    /// Relation this selection reads
    pub fn relation(&self) -> &'static str {
        self.store.name()
    }

    /// Description of the filter
    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    /// Every matching tuple, in store order
    pub fn to_vec(&self) -> Vec<Tuple> {
        let predicate = self.predicate.as_ref();
        match self.limit {
            Some(n) => self.store.take(predicate, n),
            None => self.store.filter(predicate),
        }
    }

    /// Number of matching tuples
    pub fn count(&self) -> usize {
        let matches = self.store.count(self.predicate.as_ref());
        match self.limit {
            Some(n) => matches.min(n),
            None => matches,
        }
    }

    /// Check whether nothing matches
    pub fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// The first matching tuple
    pub fn first(&self) -> Option<Tuple> {
        if self.limit == Some(0) {
            return None;
        }
        self.store
            .take(self.predicate.as_ref(), 1)
            .into_iter()
            .next()
    }

    /// Zero or one matching tuple
    ///
    /// More than one match fails with `AmbiguousResult`.
    pub fn one(&self) -> StoreResult<Option<Tuple>> {
        let mut matches = self.to_vec();
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(self.ambiguous(n)),
        }
    }

    /// Exactly one matching tuple
    ///
    /// Zero matches fail with `NotFound`, more than one with
    /// `AmbiguousResult`.
    pub fn one_required(&self) -> StoreResult<Tuple> {
        self.one()?
            .ok_or_else(|| StoreError::not_found(self.relation(), self.criteria.clone()))
    }

    /// Hydrate every matching tuple
    pub fn hydrate<E: Entity>(&self) -> StoreResult<Vec<E>> {
        Mapper::<E>::new().hydrate_all(&self.to_vec())
    }

    /// Hydrate zero or one matching tuple
    pub fn hydrate_one<E: Entity>(&self) -> StoreResult<Option<E>> {
        self.one()?
            .map(|t| Mapper::<E>::new().hydrate(&t))
            .transpose()
    }

    /// Hydrate exactly one matching tuple
    pub fn hydrate_one_required<E: Entity>(&self) -> StoreResult<E> {
        Mapper::<E>::new().hydrate(&self.one_required()?)
    }

    fn ambiguous(&self, matches: usize) -> StoreError {
        warn!(
            relation = self.relation(),
            criteria = %self.criteria,
            matches,
            "single-result query matched several tuples"
        );
        StoreError::ambiguous(self.relation(), self.criteria.clone(), matches)
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("relation", &self.relation())
            .field("criteria", &self.criteria)
            .field("limit", &self.limit)
            .finish()
    }
}
