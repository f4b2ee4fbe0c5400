//! Grouped counts over trace types
//!
//! ## Tie-break rule
//!
//! Types are grouped in order of first occurrence, then stably sorted by
//! descending total. Among equal totals the type seen first in store order
//! comes first. The most common type is the head of that ordering.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Number of traces carrying one type tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    /// The type tag
    #[serde(rename = "type")]
    pub trace_type: String,
    /// Number of traces with this tag
    pub total: usize,
}

impl TypeCount {
    /// Create a count
    pub fn new(trace_type: impl Into<String>, total: usize) -> Self {
        Self {
            trace_type: trace_type.into(),
            total,
        }
    }
}

/// Accumulates per-type totals, remembering first-occurrence order
#[derive(Debug, Default)]
pub struct TypeCounter {
    /// Position of each type in `counts`
    index: FxHashMap<String, usize>,
    counts: Vec<TypeCount>,
}

impl TypeCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `trace_type`
    pub fn record(&mut self, trace_type: &str) {
        match self.index.get(trace_type) {
            Some(&pos) => self.counts[pos].total += 1,
            None => {
                self.index.insert(trace_type.to_string(), self.counts.len());
                self.counts.push(TypeCount::new(trace_type, 1));
            }
        }
    }

    /// Totals in descending order, ties in first-occurrence order
    pub fn into_sorted(self) -> Vec<TypeCount> {
        let mut counts = self.counts;
        // sort_by is stable, which preserves first-occurrence order on ties
        counts.sort_by(|a, b| b.total.cmp(&a.total));
        counts
    }

    /// The type with the largest total, `None` when nothing was recorded
    pub fn most_common(self) -> Option<String> {
        self.into_sorted().into_iter().next().map(|c| c.trace_type)
    }
}
