//! DataStore Comprehensive Test Suite
//!
//! Exercises the public facade end to end:
//! - Account creation and lookup
//! - Buckets and their trace statistics
//! - Trace summaries and type counts
//! - Teardown and lifecycle
//! - Concurrent use through `Arc<DataStore>`
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test datastore_comprehensive
//! cargo test --test datastore_comprehensive summary::
//! ```

use bucketdb::prelude::*;

// Test modules
pub mod accounts;
pub mod concurrency;
pub mod summary;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Create a fresh store with logging enabled
pub fn create_store() -> DataStore {
    init_tracing();
    let store = DataStore::new();
    store.setup().expect("setup");
    store
}

/// Account data with the given email
pub fn account_data(email: &str) -> Tuple {
    Tuple::new()
        .with(attr::EMAIL, email)
        .with(attr::PASSWORD, "correct horse battery staple")
}

/// Bucket data with every descriptive field present
pub fn bucket_data(name: &str) -> Tuple {
    Tuple::from_json(json!({
        "type": "javascript",
        "message": name,
        "trace": "",
        "context": {"env": "test"},
    }))
    .expect("bucket data is an object")
}

/// Trace data of the given type
pub fn trace_data(kind: &str) -> Tuple {
    Tuple::from_json(json!({
        "type": kind,
        "message": format!("{} raised", kind),
        "trace": "at handler (app.js:10:5)",
        "context": {"user": 42},
    }))
    .expect("trace data is an object")
}

/// Create a bucket for `account_id` and return its id
pub fn new_bucket(store: &DataStore, account_id: &str, name: &str) -> String {
    store
        .create_bucket(account_id, bucket_data(name))
        .expect("bucket data is complete")
        .id()
        .expect("created bucket has an id")
        .to_string()
}

/// Add one trace per entry of `kinds`, in order
pub fn add_traces(store: &DataStore, bucket_id: &str, kinds: &[&str]) {
    for kind in kinds {
        store
            .add_trace(bucket_id, trace_data(kind))
            .expect("trace data is complete");
    }
}
