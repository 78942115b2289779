//! Picks how many time columns fit a chart area, trading column count
//! against a human-friendly time granularity.

/// Granularities a column may snap to, in seconds
const COLUMN_GRANULARITIES_SEC: &[u64] = &[1, 2, 5, 10, 30, 60, 300, 600, 1800, 3600];

/// Result of fitting columns into a rendered area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnCount {
    /// Whole columns that fit the duration at the chosen granularity
    pub cols: usize,
    /// Chosen per-column timespan, millis
    pub timespan_ms: u64,
    /// Fractional trailing column, in `[0, 1)`
    pub remaining: f64,
}

/// Fit time columns into `width_px`, keeping each at least `min_width_px`
/// wide and snapping the per-column timespan up to the nearest granularity.
pub fn count_columns(duration_ms: u64, width_px: f64, min_width_px: f64) -> ColumnCount {
    let max_cols = ((width_px / min_width_px).floor() as usize).max(1);
    let per_col_sec = duration_ms as f64 / 1000.0 / max_cols as f64;

    // Snap up: a coarser granularity keeps columns at or above min width
    let granularity_sec = COLUMN_GRANULARITIES_SEC
        .iter()
        .copied()
        .find(|&g| g as f64 >= per_col_sec)
        .unwrap_or_else(|| per_col_sec.ceil() as u64);

    let duration_sec = duration_ms as f64 / 1000.0;
    let exact_cols = duration_sec / granularity_sec as f64;
    let cols = exact_cols.floor() as usize;

    ColumnCount {
        cols,
        timespan_ms: granularity_sec * 1000,
        remaining: exact_cols - cols as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_area_gets_one_second_columns() {
        // 27s in 2700px at 100px minimum: 27 columns, no remainder
        let count = count_columns(27_000, 2700.0, 100.0);
        assert_eq!(count.cols, 27);
        assert_eq!(count.timespan_ms, 1_000);
        assert_eq!(count.remaining, 0.0);
    }

    #[test]
    fn test_narrow_area_snaps_to_ten_seconds() {
        // 27s in 599px: 5 columns max, 5.4s each, snapped up to 10s
        let count = count_columns(27_000, 599.0, 100.0);
        assert_eq!(count.cols, 2);
        assert_eq!(count.timespan_ms, 10_000);
        assert!((count.remaining - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration() {
        let count = count_columns(0, 1000.0, 100.0);
        assert_eq!(count.cols, 0);
        assert_eq!(count.remaining, 0.0);
    }

    #[test]
    fn test_area_narrower_than_one_column() {
        // Degenerate width still yields a single-column layout
        let count = count_columns(5_000, 40.0, 100.0);
        assert_eq!(count.timespan_ms, 5_000);
        assert_eq!(count.cols, 1);
    }
}
