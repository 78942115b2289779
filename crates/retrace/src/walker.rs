//! Reconstructs a navigable view of a trace around one "current" event.
//!
//! The query layer hands us a flat array of nodes linked by event ID. One
//! parse call builds the relatives of the current event: root, parent,
//! children, and (in full-trace mode) ancestors and descendants.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use retrace_protocol::{EventId, TraceFetchMode, TraceFetchResponse, TraceNode};

use crate::telemetry::{AnalyticsEvent, AnalyticsSink};

/// Derived, read-only view over a trace for one current node.
///
/// `ancestors` and `descendants` are `None` in lite mode ("unknown"), and
/// `Some(vec![])` when a full trace simply has none ("empty"). Callers
/// render those two cases differently, so the distinction is kept.
#[derive(Debug)]
pub struct TraceView<'a> {
    pub current: &'a TraceNode,
    pub root: Option<&'a TraceNode>,
    pub parent: Option<&'a TraceNode>,
    pub children: Vec<&'a TraceNode>,
    pub ancestors: Option<Vec<&'a TraceNode>>,
    pub descendants: Option<Vec<&'a TraceNode>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TraceViewError {
    /// The current event is not in the fetched trace
    #[error("current event not found in trace")]
    NotFound,
    /// The fetch came back empty or with a null trace
    #[error("trace fetch was empty")]
    EmptyTrace,
}

/// Stateless trace parser with an optional analytics sink
#[derive(Clone, Default)]
pub struct TraceWalker {
    analytics: Option<Arc<dyn AnalyticsSink>>,
}

impl TraceWalker {
    pub fn new() -> Self {
        Self { analytics: None }
    }

    pub fn with_analytics(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            analytics: Some(sink),
        }
    }

    /// Parse a raw fetch response, treating `empty`/null traces as errors
    pub fn parse_response<'a>(
        &self,
        response: &'a TraceFetchResponse,
        current_event_id: EventId,
    ) -> Result<TraceView<'a>, TraceViewError> {
        let mode = response.mode().ok_or(TraceViewError::EmptyTrace)?;
        let nodes = response
            .trace
            .as_deref()
            .ok_or(TraceViewError::EmptyTrace)?;
        self.parse(nodes, current_event_id, mode)
    }

    /// Build a [`TraceView`] for `current_event_id` over a flat node array.
    ///
    /// The current event matches either a node's own ID (error events) or
    /// an entry in a node's embedded error list (transaction events).
    pub fn parse<'a>(
        &self,
        nodes: &'a [TraceNode],
        current_event_id: EventId,
        mode: TraceFetchMode,
    ) -> Result<TraceView<'a>, TraceViewError> {
        let current = nodes
            .iter()
            .find(|n| n.matches_event(current_event_id))
            .ok_or(TraceViewError::NotFound)?;

        // ID -> index, built once per parse; parent links are weak
        // references into this array
        let by_id: HashMap<EventId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.event_id, i))
            .collect();

        let parent = current
            .parent_event_id
            .and_then(|id| by_id.get(&id))
            .map(|&i| &nodes[i]);

        // If the structural root is also the direct parent, it is shown as
        // "parent" and not duplicated as "root"
        let root = nodes.iter().find(|n| {
            n.is_root()
                && n.event_id != current.event_id
                && parent.map_or(true, |p| p.event_id != n.event_id)
        });

        let mut children: Vec<&TraceNode> = nodes
            .iter()
            .filter(|n| n.parent_event_id == Some(current.event_id))
            .collect();
        // Longest-running children first; stable so equal durations keep
        // their fetch order
        children.sort_by(|a, b| b.duration_ms.total_cmp(&a.duration_ms));

        let (ancestors, descendants) = match (mode, current.generation) {
            (TraceFetchMode::Full, Some(generation)) => {
                let generation = i64::from(generation);

                let mut ancestors: Vec<&TraceNode> = nodes
                    .iter()
                    .filter(|n| {
                        n.generation
                            .is_some_and(|g| i64::from(g) < generation - 1)
                            && root.map_or(true, |r| r.event_id != n.event_id)
                            && parent.map_or(true, |p| p.event_id != n.event_id)
                    })
                    .collect();
                ancestors.sort_by_key(|n| n.generation);

                let mut descendants: Vec<&TraceNode> = nodes
                    .iter()
                    .filter(|n| {
                        n.generation
                            .is_some_and(|g| i64::from(g) > generation + 1)
                            && n.parent_event_id != Some(current.event_id)
                    })
                    .collect();
                descendants.sort_by_key(|n| n.generation);

                (Some(ancestors), Some(descendants))
            }
            _ => (None, None),
        };

        if mode == TraceFetchMode::Full {
            self.report_project_spread(nodes);
        }

        Ok(TraceView {
            current,
            root,
            parent,
            children,
            ancestors,
            descendants,
        })
    }

    /// Emit a one-shot analytics event when a full trace crosses project
    /// boundaries. Best-effort: never affects the parse result.
    fn report_project_spread(&self, nodes: &[TraceNode]) {
        let Some(sink) = &self.analytics else {
            return;
        };

        let projects: HashSet<u64> = nodes
            .iter()
            .flat_map(|n| {
                std::iter::once(n.project_id).chain(n.errors.iter().map(|e| e.project_id))
            })
            .collect();

        if projects.len() > 1 {
            sink.record(AnalyticsEvent::MultiProjectTrace {
                projects: projects.len(),
            });
        }
    }
}
