//! Write commands
//!
//! Every mutation goes through a command bound to one tuple store. There
//! are only two: create (insert with a generated id) and clear (wipe the
//! whole store). Commands hold no state beyond the store handle.

use crate::mapper::{Entity, Mapper};
use crate::relation::Stores;
use bucketdb_core::{StoreResult, Tuple, ID_ATTRIBUTE};
use bucketdb_storage::TupleStore;
use std::sync::Arc;
use uuid::Uuid;

/// Inserts a tuple under a freshly generated id
#[derive(Debug, Clone)]
pub struct CreateCommand {
    store: Arc<TupleStore>,
}

impl CreateCommand {
    /// Bind to `store`
    pub fn new(store: Arc<TupleStore>) -> Self {
        Self { store }
    }

    /// Insert `data` with a new v4 UUID as `id` and return the stored tuple
    ///
    /// A caller-supplied `id` is overwritten; ids are never chosen by callers.
    pub fn call(&self, data: Tuple) -> Tuple {
        self.store.insert(Self::assign_id(data))
    }

    /// Like [`call`](Self::call), but hydrate before inserting
    ///
    /// The tuple is stored only if it hydrates into `E`, so a failed
    /// create leaves the store untouched.
    pub fn call_hydrated<E: Entity>(&self, data: Tuple) -> StoreResult<E> {
        let tuple = Self::assign_id(data);
        let entity = Mapper::<E>::new().hydrate(&tuple)?;
        self.store.insert(tuple);
        Ok(entity)
    }

    /// Insert `data` only if it hydrates into `E`, returning the raw tuple
    ///
    /// For creates that hand back the stored tuple rather than the entity.
    /// A tuple that would fail to hydrate is never stored.
    pub fn call_validated<E: Entity>(&self, data: Tuple) -> StoreResult<Tuple> {
        let tuple = Self::assign_id(data);
        Mapper::<E>::new().hydrate(&tuple)?;
        Ok(self.store.insert(tuple))
    }

    fn assign_id(data: Tuple) -> Tuple {
        data.with(ID_ATTRIBUTE, Uuid::new_v4().to_string())
    }
}

/// Removes every tuple from a store
#[derive(Debug, Clone)]
pub struct ClearCommand {
    store: Arc<TupleStore>,
}

impl ClearCommand {
    /// Bind to `store`
    pub fn new(store: Arc<TupleStore>) -> Self {
        Self { store }
    }

    /// Wipe the store. Always succeeds, including on an empty store.
    pub fn call(&self) {
        self.store.clear();
    }
}

/// The create and clear commands of one relation
#[derive(Debug, Clone)]
pub struct CommandSet {
    /// Create command
    pub create: CreateCommand,
    /// Clear command
    pub clear: ClearCommand,
}

impl CommandSet {
    /// Bind both commands to `store`
    pub fn bind(store: &Arc<TupleStore>) -> Self {
        Self {
            create: CreateCommand::new(Arc::clone(store)),
            clear: ClearCommand::new(Arc::clone(store)),
        }
    }
}

/// One command set per relation
#[derive(Debug, Clone)]
pub struct Commands {
    /// Accounts commands
    pub accounts: CommandSet,
    /// Buckets commands
    pub buckets: CommandSet,
    /// Traces commands
    pub traces: CommandSet,
}

impl Commands {
    /// Bind command sets to `stores`
    pub fn bind(stores: &Stores) -> Self {
        Self {
            accounts: CommandSet::bind(&stores.accounts),
            buckets: CommandSet::bind(&stores.buckets),
            traces: CommandSet::bind(&stores.traces),
        }
    }
}
