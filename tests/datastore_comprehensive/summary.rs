//! Bucket Summary Tests
//!
//! Tests for:
//! - add_trace
//! - traces
//! - summarize_bucket (bounded traces, unbounded counts)

use crate::*;

/// Test add_trace merges the bucket id into the raw tuple
#[test]
fn test_add_trace_returns_raw_tuple() {
    let store = create_store();
    let raw = store
        .add_trace("b1", trace_data("TypeError").with(attr::BUCKET_ID, "other"))
        .unwrap();

    assert_eq!(raw.get_str(attr::BUCKET_ID), Some("b1"));
    assert_eq!(raw.get_str(attr::TYPE), Some("TypeError"));
    assert!(raw.id().is_some());
}

/// Test traces come back hydrated in insertion order
#[test]
fn test_traces_in_order() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    add_traces(&store, &bucket, &["a", "b", "c"]);

    let kinds: Vec<String> = store
        .traces(&bucket, None)
        .unwrap()
        .iter()
        .map(|t| t.trace_type().to_string())
        .collect();
    assert_eq!(kinds, vec!["a", "b", "c"]);

    let first_two = store.traces(&bucket, Some(2)).unwrap();
    assert_eq!(first_two.len(), 2);
    assert!(first_two.iter().all(|t| t.bucket_id() == bucket));
}

/// Test the summary limit truncates traces but not counts
#[test]
fn test_summarize_limit_does_not_bound_counts() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    add_traces(&store, &bucket, &["x", "x", "y"]);

    let summary = store.summarize_bucket(&bucket, Some(1)).unwrap();

    assert_eq!(summary.bucket.id(), bucket);
    assert_eq!(summary.traces.len(), 1);
    assert_eq!(summary.traces[0].trace_type(), "x");
    assert_eq!(
        summary.counts,
        vec![TypeCount::new("x", 2), TypeCount::new("y", 1)]
    );
}

/// Test the default limit is 20
#[test]
fn test_summarize_default_limit() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    let kinds = vec!["x"; 25];
    add_traces(&store, &bucket, &kinds);

    let summary = store.summarize_bucket(&bucket, None).unwrap();
    assert_eq!(summary.traces.len(), bucketdb::DEFAULT_SUMMARY_LIMIT);
    assert_eq!(summary.counts, vec![TypeCount::new("x", 25)]);
}

/// Test summarizing an empty bucket
#[test]
fn test_summarize_empty_bucket() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");

    let summary = store.summarize_bucket(&bucket, Some(5)).unwrap();
    assert!(summary.traces.is_empty());
    assert!(summary.counts.is_empty());
}

/// Test summarizing an unknown bucket
#[test]
fn test_summarize_unknown_bucket() {
    let store = create_store();
    add_traces(&store, "ghost", &["x"]);

    let err = store.summarize_bucket("ghost", None).unwrap_err();
    assert!(err.is_not_found());
}

/// Test tie-break: equal totals keep first-seen order
#[test]
fn test_counts_tie_break_first_seen() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    add_traces(&store, &bucket, &["y", "x", "x", "y"]);

    let summary = store.summarize_bucket(&bucket, None).unwrap();
    assert_eq!(
        summary.counts,
        vec![TypeCount::new("y", 2), TypeCount::new("x", 2)]
    );
    let info = store.buckets("a1").unwrap().remove(0);
    assert_eq!(info.most_common_type(), Some("y"));
}

/// Test traces of other buckets do not leak into counts
#[test]
fn test_counts_scoped_to_bucket() {
    let store = create_store();
    let one = new_bucket(&store, "a1", "one");
    let two = new_bucket(&store, "a1", "two");
    add_traces(&store, &one, &["x"]);
    add_traces(&store, &two, &["y", "y"]);

    let summary = store.summarize_bucket(&one, None).unwrap();
    assert_eq!(summary.counts, vec![TypeCount::new("x", 1)]);
}

/// Test the summary serializes with `type` keys
#[test]
fn test_summary_serializes() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    add_traces(&store, &bucket, &["x"]);

    let summary = store.summarize_bucket(&bucket, None).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["counts"][0]["type"], "x");
    assert_eq!(json["counts"][0]["total"], 1);
    assert_eq!(json["traces"][0]["type"], "x");
    assert_eq!(json["traces"][0]["context"], json!({"user": 42}));
    assert_eq!(json["bucket"]["context"], json!({"env": "test"}));
    assert_eq!(json["bucket"]["message"], "b");
}

/// Test a null trace field is accepted and summarized
#[test]
fn test_null_trace_field_is_summarized() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    let data = Tuple::from_json(json!({
        "type": "x",
        "message": "boom",
        "trace": null,
        "context": {},
    }))
    .unwrap();
    store.add_trace(&bucket, data).unwrap();

    let summary = store.summarize_bucket(&bucket, None).unwrap();
    assert!(summary.traces[0].trace().is_null());
    assert_eq!(summary.counts, vec![TypeCount::new("x", 1)]);
}

/// Test an incomplete trace is rejected and the bucket stays summarizable
#[test]
fn test_incomplete_trace_is_not_stored() {
    let store = create_store();
    let bucket = new_bucket(&store, "a1", "b");
    add_traces(&store, &bucket, &["x"]);

    let err = store
        .add_trace(&bucket, Tuple::new().with(attr::TYPE, "y"))
        .unwrap_err();
    assert!(matches!(err, Error::MissingAttribute { ref relation, .. } if relation == "traces"));
    assert_eq!(store.metrics().traces, 1);

    let summary = store.summarize_bucket(&bucket, None).unwrap();
    assert_eq!(summary.counts, vec![TypeCount::new("x", 1)]);
}
