//! Data-contract types for retrace.
//!
//! This crate defines the in-memory shapes exchanged with the data-fetching
//! layer: trace fetch responses, timeseries buckets, and table rows.

pub mod event_id;
pub mod node;
pub mod series;

pub use event_id::*;
pub use node::*;
pub use series::*;
