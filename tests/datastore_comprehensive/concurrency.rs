//! Concurrency Tests
//!
//! Tests for thread safety of a shared `Arc<DataStore>`:
//! - Concurrent trace creation
//! - Concurrent reads while writing

use crate::*;
use std::sync::{Arc, Barrier};
use std::thread;

/// Test concurrent trace creation loses nothing
#[test]
fn test_concurrent_add_trace() {
    let store = Arc::new(create_store());
    let bucket = new_bucket(&store, "a1", "shared");

    const NUM_THREADS: usize = 8;
    const TRACES_PER_THREAD: usize = 25;

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            let bucket = bucket.clone();

            thread::spawn(move || {
                barrier.wait();
                let kind = format!("thread_{}", i);
                for _ in 0..TRACES_PER_THREAD {
                    store.add_trace(&bucket, trace_data(&kind)).unwrap();
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let summary = store.summarize_bucket(&bucket, None).unwrap();
    assert_eq!(summary.counts.len(), NUM_THREADS);
    assert!(summary.counts.iter().all(|c| c.total == TRACES_PER_THREAD));

    let info = store.buckets("a1").unwrap().remove(0);
    assert_eq!(info.total(), NUM_THREADS * TRACES_PER_THREAD);
}

/// Test readers observe consistent aggregates while writers insert
#[test]
fn test_concurrent_reads_during_writes() {
    let store = Arc::new(create_store());
    let bucket = new_bucket(&store, "a1", "shared");

    const NUM_WRITERS: usize = 4;
    const NUM_READERS: usize = 4;
    const WRITES: usize = 50;

    let barrier = Arc::new(Barrier::new(NUM_WRITERS + NUM_READERS));
    let mut handles = Vec::new();

    for _ in 0..NUM_WRITERS {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let bucket = bucket.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..WRITES {
                store.add_trace(&bucket, trace_data("x")).unwrap();
            }
        }));
    }

    for _ in 0..NUM_READERS {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let bucket = bucket.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..WRITES {
                let summary = store.summarize_bucket(&bucket, Some(5)).unwrap();
                assert!(summary.traces.len() <= 5);
                let counted: usize = summary.counts.iter().map(|c| c.total).sum();
                assert!(counted <= NUM_WRITERS * WRITES);
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(store.metrics().traces, NUM_WRITERS * WRITES);
}
