//! Client-side trace and timeseries reconstruction for performance views.
//!
//! Three synchronous, allocation-light transforms over data the fetch layer
//! already holds in memory:
//!
//! - [`walker::TraceWalker`] rebuilds the relatives of one event (root,
//!   parent, children, ancestors, descendants) from a flat trace array
//! - [`frames::flatten_frames`] coalesces overlapping spans into
//!   non-overlapping ranges for activity rendering
//! - [`streaming::StreamingBucketMerger`] counts newly arrived rows into
//!   the buckets of an already-fetched timeseries for live tailing
//!
//! # Example
//!
//! ```
//! use retrace::{TraceWalker, TraceFetchMode};
//! use retrace_protocol::{EventId, TraceNode};
//!
//! # fn example(nodes: Vec<TraceNode>, current: EventId) -> Result<(), retrace::TraceViewError> {
//! let walker = TraceWalker::new();
//! let view = walker.parse(&nodes, current, TraceFetchMode::Full)?;
//!
//! for child in &view.children {
//!     println!("{} took {}ms", child.event_id, child.duration_ms);
//! }
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod frames;
pub mod streaming;
pub mod telemetry;
pub mod walker;

pub use retrace_protocol::{TraceFetchMode, TraceFetchResponse, TraceNode};

pub use columns::{count_columns, ColumnCount};
pub use frames::{flatten_frames, FlattenedRange};
pub use streaming::StreamingBucketMerger;
pub use telemetry::{AnalyticsEvent, AnalyticsSink, TracingSink};
pub use walker::{TraceView, TraceViewError, TraceWalker};
