//! In-memory tuple store
//!
//! One `TupleStore` backs one relation. Tuples are appended in insertion
//! order and stay until the whole store is cleared; there is no update and
//! no selective delete.
//!
//! # Design
//!
//! - `Vec<Tuple>`: insertion order is the iteration order
//! - No index: every filter is a linear scan
//! - `RwLock`: scans share the read lock, insert/clear take the write lock
//!
//! # Thread Safety
//!
//! The lock makes concurrent scans and inserts safe to interleave. It does
//! not make sequences of calls atomic: a scan followed by an insert from
//! another thread may observe either order.

use bucketdb_core::Tuple;
use parking_lot::RwLock;
use tracing::{debug, info};

/// Append-only-until-cleared collection of tuples
#[derive(Debug)]
pub struct TupleStore {
    /// Relation name, used in log events
    name: &'static str,
    /// Tuples in insertion order
    tuples: RwLock<Vec<Tuple>>,
}

impl TupleStore {
    /// Create an empty store for the named relation
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tuples: RwLock::new(Vec::new()),
        }
    }

    /// Relation name this store backs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a tuple and return a copy of what was stored
    pub fn insert(&self, tuple: Tuple) -> Tuple {
        let mut tuples = self.tuples.write();
        tuples.push(tuple.clone());
        debug!(relation = self.name, id = ?tuple.id(), len = tuples.len(), "tuple inserted");
        tuple
    }

    /// All tuples matching `predicate`, in insertion order
    pub fn filter<P>(&self, predicate: P) -> Vec<Tuple>
    where
        P: Fn(&Tuple) -> bool,
    {
        self.tuples
            .read()
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    /// The first `n` tuples matching `predicate`
    ///
    /// Stops scanning once `n` matches have been collected.
    pub fn take<P>(&self, predicate: P, n: usize) -> Vec<Tuple>
    where
        P: Fn(&Tuple) -> bool,
    {
        self.tuples
            .read()
            .iter()
            .filter(|t| predicate(t))
            .take(n)
            .cloned()
            .collect()
    }

    /// Number of tuples matching `predicate`
    ///
    /// Counts under the read lock without cloning.
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Tuple) -> bool,
    {
        self.tuples.read().iter().filter(|t| predicate(t)).count()
    }

    /// Visit every matching tuple by reference under the read lock
    ///
    /// Used by aggregations that only need a few attributes per tuple.
    pub fn for_each<P, F>(&self, predicate: P, mut visit: F)
    where
        P: Fn(&Tuple) -> bool,
        F: FnMut(&Tuple),
    {
        for tuple in self.tuples.read().iter().filter(|t| predicate(t)) {
            visit(tuple);
        }
    }

    /// Remove every tuple
    ///
    /// Idempotent: clearing an empty store is a no-op.
    pub fn clear(&self) {
        let mut tuples = self.tuples.write();
        let removed = tuples.len();
        tuples.clear();
        info!(relation = self.name, removed, "relation cleared");
    }

    /// Total number of tuples
    pub fn len(&self) -> usize {
        self.tuples.read().len()
    }

    /// Check if the store holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.read().is_empty()
    }
}
