//! Main entry point for bucketdb.
//!
//! This module provides the `DataStore` struct, the only object application
//! code needs to touch. It owns the tuple stores and the relation and
//! command handles bound to them, and never hands the stores out.

use crate::config::StoreConfig;
use crate::error::Result;
use crate::types::{attr, Account, Bucket, TraceLog, Tuple};
use crate::views::{BucketInfo, BucketSummary};
use bucketdb_primitives::{Commands, Relations, Stores};
use tracing::{debug, info};

/// The bucketdb data store.
///
/// Commands mutate, queries read. Create one at process start and share it
/// by reference or `Arc`; there is no global instance.
///
/// # Example
///
/// ```
/// use bucketdb::prelude::*;
///
/// let store = DataStore::new();
/// let account = store.create_account(
///     Tuple::new().with("email", "Ann@Example.com").with("password", "pw"),
/// )?;
///
/// let found = store.account_with_email("ann@example.com")?;
/// assert_eq!(found.as_ref().map(Account::id), Some(account.id()));
///
/// store.teardown();
/// assert!(store.account(account.id()).unwrap_err().is_not_found());
/// # Ok::<(), bucketdb::Error>(())
/// ```
///
/// # Thread Safety
///
/// Each relation's tuples sit behind their own read/write lock, so a
/// `DataStore` is `Send + Sync`. Operations touching several relations
/// (`buckets`, `summarize_bucket`, `teardown`) are not atomic across them.
#[derive(Debug)]
pub struct DataStore {
    stores: Stores,
    relations: Relations,
    commands: Commands,
    config: StoreConfig,
}

impl DataStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```
    /// let store = bucketdb::DataStore::builder().summary_limit(5).build()?;
    /// assert_eq!(store.config().summary_limit, 5);
    /// # Ok::<(), bucketdb::Error>(())
    /// ```
    pub fn builder() -> DataStoreBuilder {
        DataStoreBuilder::new()
    }

    fn with_config(config: StoreConfig) -> Self {
        let stores = Stores::new();
        Self {
            relations: Relations::bind(&stores),
            commands: Commands::bind(&stores),
            stores,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Prepare the store for use.
    ///
    /// Counterpart of [`teardown`](Self::teardown). The in-memory backend
    /// has nothing to bootstrap.
    pub fn setup(&self) -> Result<()> {
        info!(summary_limit = self.config.summary_limit, "data store ready");
        Ok(())
    }

    /// Delete everything from every relation.
    ///
    /// Clears accounts, then buckets, then traces. Calling it again on an
    /// empty store is a no-op.
    pub fn teardown(&self) {
        self.commands.accounts.clear.call();
        self.commands.buckets.clear.call();
        self.commands.traces.clear.call();
        info!("data store torn down");
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Create an account and return it hydrated.
    ///
    /// `data` needs `email` and `password`; the id is generated. Nothing is
    /// stored if the data does not hydrate into an [`Account`].
    pub fn create_account(&self, data: Tuple) -> Result<Account> {
        let account = self
            .commands
            .accounts
            .create
            .call_hydrated::<Account>(data)?;
        debug!(id = account.id(), "account created");
        Ok(account)
    }

    /// The account with `id`.
    ///
    /// Fails with `NotFound` when absent and `AmbiguousResult` when the id
    /// is duplicated.
    pub fn account(&self, id: &str) -> Result<Account> {
        Ok(self.relations.accounts.with_id(id).hydrate_one_required()?)
    }

    /// The account whose email matches `email`, ignoring case.
    ///
    /// Emails are not enforced unique; several matches fail with
    /// `AmbiguousResult`.
    pub fn account_with_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self.relations.accounts.with_email(email).hydrate_one()?)
    }

    // =========================================================================
    // Buckets
    // =========================================================================

    /// Create a bucket owned by `account_id`.
    ///
    /// Returns the raw stored tuple, not a hydrated [`Bucket`]; use
    /// [`bucket`](Self::bucket) with the tuple's id for the entity. The
    /// account is not checked for existence. Data that would not hydrate
    /// into a [`Bucket`] is rejected and nothing is stored.
    pub fn create_bucket(&self, account_id: &str, data: Tuple) -> Result<Tuple> {
        let stored = self
            .commands
            .buckets
            .create
            .call_validated::<Bucket>(data.with(attr::ACCOUNT_ID, account_id))?;
        debug!(id = ?stored.id(), account_id, "bucket created");
        Ok(stored)
    }

    /// The bucket with `id`.
    pub fn bucket(&self, id: &str) -> Result<Bucket> {
        Ok(self.relations.buckets.with_id(id).hydrate_one_required()?)
    }

    /// Every bucket of `account_id` with its trace statistics.
    ///
    /// Statistics come straight from the traces relation, without
    /// hydrating the traces. Order follows the buckets relation.
    pub fn buckets(&self, account_id: &str) -> Result<Vec<BucketInfo>> {
        let buckets: Vec<Bucket> = self.relations.buckets.for_account(account_id).hydrate()?;
        let traces = &self.relations.traces;

        buckets
            .into_iter()
            .map(|bucket| -> Result<BucketInfo> {
                let total = traces.count_bucket(bucket.id());
                let most_common_type = traces.most_common_type(bucket.id())?;
                Ok(BucketInfo::new(bucket, total, most_common_type))
            })
            .collect()
    }

    // =========================================================================
    // Traces
    // =========================================================================

    /// Add a trace to `bucket_id` and return the raw stored tuple.
    ///
    /// The bucket is not checked for existence. Data that would not
    /// hydrate into a [`TraceLog`] is rejected and nothing is stored.
    pub fn add_trace(&self, bucket_id: &str, data: Tuple) -> Result<Tuple> {
        let stored = self
            .commands
            .traces
            .create
            .call_validated::<TraceLog>(data.with(attr::BUCKET_ID, bucket_id))?;
        debug!(id = ?stored.id(), bucket_id, "trace added");
        Ok(stored)
    }

    /// Hydrated traces of `bucket_id` in insertion order, optionally bounded.
    pub fn traces(&self, bucket_id: &str, limit: Option<usize>) -> Result<Vec<TraceLog>> {
        Ok(self.relations.traces.in_bucket(bucket_id, limit).hydrate()?)
    }

    /// Summarize one bucket.
    ///
    /// Returns at most `limit` traces (the configured `summary_limit` when
    /// `None`), while `counts` covers every trace in the bucket. Fails with
    /// `NotFound` if the bucket does not exist.
    pub fn summarize_bucket(&self, bucket_id: &str, limit: Option<usize>) -> Result<BucketSummary> {
        let bucket = self.bucket(bucket_id)?;
        let limit = limit.unwrap_or(self.config.summary_limit);
        let traces = self.traces(bucket_id, Some(limit))?;
        let counts = self.relations.traces.count_types(bucket_id)?;

        Ok(BucketSummary {
            bucket,
            traces,
            counts,
        })
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Tuple counts per relation.
    pub fn metrics(&self) -> StoreMetrics {
        StoreMetrics {
            accounts: self.stores.accounts.len(),
            buckets: self.stores.buckets.len(),
            traces: self.stores.traces.len(),
        }
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Store metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreMetrics {
    /// Stored accounts
    pub accounts: usize,
    /// Stored buckets
    pub buckets: usize,
    /// Stored traces
    pub traces: usize,
}

impl StoreMetrics {
    /// Total tuples across relations.
    pub fn total(&self) -> usize {
        self.accounts + self.buckets + self.traces
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use bucketdb::{DataStoreBuilder, StoreConfig};
///
/// let config = StoreConfig::from_json(r#"{"summary_limit": 50}"#)?;
/// let store = DataStoreBuilder::from_config(config).build()?;
/// assert_eq!(store.config().summary_limit, 50);
/// # Ok::<(), bucketdb::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataStoreBuilder {
    config: StoreConfig,
}

impl DataStoreBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Set the default trace limit of `summarize_bucket`.
    pub fn summary_limit(mut self, limit: usize) -> Self {
        self.config.summary_limit = limit;
        self
    }

    /// Validate the configuration and create the store.
    pub fn build(self) -> Result<DataStore> {
        self.config.validate()?;
        Ok(DataStore::with_config(self.config))
    }
}
