use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bucket of a timeseries: interval-aligned timestamp plus value
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Epoch millis, aligned to the query interval
    pub timestamp: i64,
    pub value: f64,
}

/// Timeseries fetch response: one bucket sequence per series name.
///
/// All sequences in one map share identical bucket timestamps in the
/// same order.
pub type SeriesMap = BTreeMap<String, Vec<SeriesPoint>>;

/// One row of a table fetch, as far as the streaming merger is concerned
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TableRow {
    /// Nanosecond-precision row timestamp
    pub timestamp_ns: u64,
}

impl TableRow {
    /// Row timestamp in epoch millis, for comparison against bucket
    /// timestamps
    pub fn timestamp_ms(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000.0
    }
}

/// Raw time-ranged span as observed by replay/activity views, before
/// coalescing
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FrameSpan {
    /// Epoch millis
    pub start_timestamp: i64,
    /// Epoch millis, `>= start_timestamp`
    pub end_timestamp: i64,
}
