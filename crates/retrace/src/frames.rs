//! Coalesces overlapping time-ranged spans into non-overlapping ranges for
//! replay/activity visualization.

use retrace_protocol::FrameSpan;

/// One coalesced, non-overlapping time interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlattenedRange {
    /// Epoch millis
    pub start_timestamp: i64,
    /// Epoch millis
    pub end_timestamp: i64,
    pub duration: i64,
    /// Number of input spans folded into this range
    pub frame_count: usize,
}

/// Merge overlapping spans into sorted, pairwise non-overlapping ranges.
///
/// Input spans need not be sorted. Adjacent output ranges satisfy
/// `ranges[i].end_timestamp <= ranges[i + 1].start_timestamp`, and the
/// frame counts sum to the number of input spans.
pub fn flatten_frames(spans: &[FrameSpan]) -> Vec<FlattenedRange> {
    let mut sorted: Vec<FrameSpan> = spans.to_vec();
    sorted.sort_by_key(|s| s.start_timestamp);

    let mut ranges: Vec<FlattenedRange> = Vec::new();

    for span in sorted {
        match ranges.last_mut() {
            // Overlaps (or touches) the open range: fold it in
            Some(open) if span.start_timestamp <= open.end_timestamp => {
                open.end_timestamp = open.end_timestamp.max(span.end_timestamp);
                open.duration = open.end_timestamp - open.start_timestamp;
                open.frame_count += 1;
            }
            _ => {
                ranges.push(FlattenedRange {
                    start_timestamp: span.start_timestamp,
                    end_timestamp: span.end_timestamp,
                    duration: span.end_timestamp - span.start_timestamp,
                    frame_count: 1,
                });
            }
        }
    }

    ranges
}
