//! Accounts relation

use crate::entity::attr;
use crate::relation::attr_eq;
use crate::selection::Selection;
use bucketdb_storage::TupleStore;
use std::sync::Arc;

/// Filters over the accounts store
#[derive(Debug, Clone)]
pub struct Accounts {
    store: Arc<TupleStore>,
}

impl Accounts {
    /// Bind to the accounts store
    pub fn new(store: Arc<TupleStore>) -> Self {
        Self { store }
    }

    /// Every account
    pub fn all(&self) -> Selection {
        Selection::all(Arc::clone(&self.store))
    }

    /// Accounts with the given id
    pub fn with_id(&self, id: &str) -> Selection {
        Selection::new(
            Arc::clone(&self.store),
            format!("id = {:?}", id),
            attr_eq(attr::ID, id),
        )
    }

    /// Accounts whose email equals `email`, ignoring case
    ///
    /// Emails are stored as given; only the comparison folds case.
    pub fn with_email(&self, email: &str) -> Selection {
        let wanted = email.to_lowercase();
        Selection::new(
            Arc::clone(&self.store),
            format!("lower(email) = {:?}", wanted),
            move |t| {
                t.get_str(attr::EMAIL)
                    .is_some_and(|e| e.to_lowercase() == wanted)
            },
        )
    }
}
