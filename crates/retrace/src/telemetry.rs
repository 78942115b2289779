//! Fire-and-forget analytics seam.
//!
//! The walker reports a handful of product-analytics signals. Delivery is
//! best-effort: a sink that fails must swallow its own error, and no sink
//! call may propagate into the parse result.

/// Product-analytics events emitted by the reconstruction layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// A full trace spanned more than one project
    MultiProjectTrace { projects: usize },
}

/// Destination for analytics events.
///
/// `record` is infallible by contract: implementations handle (and drop)
/// their own delivery failures.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that forwards analytics events to the `tracing` subscriber
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: AnalyticsEvent) {
        match event {
            AnalyticsEvent::MultiProjectTrace { projects } => {
                tracing::debug!(projects, "trace spans multiple projects");
            }
        }
    }
}
