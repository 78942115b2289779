//! Rolling timeseries buffer for live-tailing charts.
//!
//! While live mode is on, newly arrived table rows are counted into the
//! buckets of the last full timeseries fetch instead of re-fetching the
//! whole series. The bucket timestamp set is fixed for a live session:
//! rows only increment existing buckets.

use retrace_protocol::{SeriesMap, TableRow};

/// Accumulator owned by a single view; all mutation goes through `&mut
/// self`, callers serialize ingests in arrival order.
#[derive(Clone, Debug, Default)]
pub struct StreamingBucketMerger {
    /// Last full fetch, returned unmodified when not live
    baseline: SeriesMap,
    /// Live buffer the rows are counted into
    buffer: SeriesMap,
    /// Bucket timestamps (epoch millis), shared by every series
    intervals: Vec<i64>,
    /// Newest row timestamp already counted; older rows are skipped
    last_seen_ns: Option<u64>,
    live: bool,
}

impl StreamingBucketMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Toggle live mode. Turning it off discards the buffer; the next
    /// `current_view` falls back to the baseline.
    pub fn set_live(&mut self, live: bool) {
        if self.live && !live {
            self.reset();
        }
        self.live = live;
    }

    /// Snapshot a freshly fetched timeseries as the baseline.
    ///
    /// A changed bucket-timestamp set means the query itself changed, so
    /// the buffer is reset before re-seeding. `latest_row_ns` is the newest
    /// row timestamp of the table fetch that accompanied the series, if
    /// any.
    pub fn initialize(&mut self, series: &SeriesMap, latest_row_ns: Option<u64>) {
        let intervals = bucket_timestamps(series);
        if intervals != self.intervals {
            tracing::trace!(buckets = intervals.len(), "bucket set changed, resetting buffer");
            self.reset();
            self.intervals = intervals;
        }

        self.baseline = series.clone();
        if self.buffer.is_empty() {
            self.buffer = series.clone();
        }
        if latest_row_ns.is_some() {
            self.last_seen_ns = latest_row_ns;
        }
    }

    /// Count new rows into their nearest buckets.
    ///
    /// Rows at or before the last-seen timestamp are skipped. Each
    /// remaining row increments the value of its nearest bucket by one in
    /// every series. With no known buckets this is a no-op: the buffer is
    /// a cosmetic live-tailing aid, dropping rows is acceptable.
    pub fn ingest(&mut self, rows: &[TableRow]) {
        if self.intervals.is_empty() || self.buffer.is_empty() {
            return;
        }

        let mut max_seen = self.last_seen_ns;

        for row in rows {
            if self.last_seen_ns.is_some_and(|seen| row.timestamp_ns <= seen) {
                continue;
            }

            let bucket = self.nearest_bucket(row.timestamp_ms());
            for points in self.buffer.values_mut() {
                if let Some(point) = points.get_mut(bucket) {
                    point.value += 1.0;
                }
            }

            max_seen = Some(max_seen.map_or(row.timestamp_ns, |m| m.max(row.timestamp_ns)));
        }

        self.last_seen_ns = max_seen;
    }

    /// Drop the buffer and last-seen watermark
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.intervals.clear();
        self.last_seen_ns = None;
    }

    /// The series to render: the live buffer when it has data, otherwise
    /// the unmodified baseline
    pub fn current_view(&self) -> &SeriesMap {
        if self.live && !self.buffer.is_empty() {
            &self.buffer
        } else {
            &self.baseline
        }
    }

    // First closest wins: strict `<` over the scan, so an exact tie keeps
    // the earlier interval. Observed behavior, kept as-is.
    fn nearest_bucket(&self, row_ms: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, &bucket_ms) in self.intervals.iter().enumerate() {
            let distance = (row_ms - bucket_ms as f64).abs();
            if distance < best_distance {
                best_distance = distance;
                best = i;
            }
        }
        best
    }
}

fn bucket_timestamps(series: &SeriesMap) -> Vec<i64> {
    series
        .values()
        .next()
        .map(|points| points.iter().map(|p| p.timestamp).collect())
        .unwrap_or_default()
}
