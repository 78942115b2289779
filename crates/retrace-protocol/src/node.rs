use serde::{Deserialize, Serialize};

use crate::event_id::EventId;

/// One observed unit of work in a distributed trace
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceNode {
    pub event_id: EventId,
    /// Weak back-reference to another node's `event_id`; lookup only,
    /// never an ownership edge
    #[serde(default)]
    pub parent_event_id: Option<EventId>,
    /// Depth from the trace root (root = 0); unknown in lite-trace mode
    #[serde(default)]
    pub generation: Option<u32>,
    pub project_id: u64,
    /// Transaction duration, used for child ranking
    pub duration_ms: f64,
    /// Error events folded into this transaction node
    #[serde(default)]
    pub errors: Vec<EmbeddedError>,
}

impl TraceNode {
    /// Whether this node is the "current" one for the given event ID, either
    /// directly (error-type events) or through its embedded error list
    /// (transaction-type events)
    pub fn matches_event(&self, event_id: EventId) -> bool {
        self.event_id == event_id || self.errors.iter().any(|e| e.event_id == event_id)
    }

    /// Whether this node sits at the structural root of the trace
    pub fn is_root(&self) -> bool {
        self.generation == Some(0)
    }
}

/// An error event attached to a transaction node
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmbeddedError {
    pub event_id: EventId,
    pub project_id: u64,
}

/// Fetch result variant reported by the query layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceFetchKind {
    Full,
    Lite,
    Empty,
}

/// Which algorithm variant the walker runs
///
/// `Lite` traces lack full ancestor/descendant visibility; the walker
/// reports those sets as unknown rather than empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceFetchMode {
    Full,
    Lite,
}

/// Trace fetch response as delivered by the query layer:
/// `{type: 'full'|'lite'|'empty', trace: [...] | null}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceFetchResponse {
    #[serde(rename = "type")]
    pub kind: TraceFetchKind,
    pub trace: Option<Vec<TraceNode>>,
}

impl TraceFetchResponse {
    /// The walker mode for this response, or `None` for an empty fetch
    pub fn mode(&self) -> Option<TraceFetchMode> {
        match self.kind {
            TraceFetchKind::Full => Some(TraceFetchMode::Full),
            TraceFetchKind::Lite => Some(TraceFetchMode::Lite),
            TraceFetchKind::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "type": "full",
            "trace": [
                {
                    "event_id": "0123456789abcdef0123456789abcdef",
                    "parent_event_id": null,
                    "generation": 0,
                    "project_id": 1,
                    "duration_ms": 123.4,
                    "errors": [
                        {"event_id": "ffffffffffffffffffffffffffffffff", "project_id": 1}
                    ]
                }
            ]
        }"#;

        let resp: TraceFetchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.kind, TraceFetchKind::Full);
        assert_eq!(resp.mode(), Some(TraceFetchMode::Full));

        let trace = resp.trace.unwrap();
        assert_eq!(trace.len(), 1);
        assert!(trace[0].is_root());
        assert_eq!(trace[0].errors.len(), 1);
    }

    #[test]
    fn test_deserialize_empty_response() {
        let resp: TraceFetchResponse =
            serde_json::from_str(r#"{"type": "empty", "trace": null}"#).unwrap();
        assert_eq!(resp.kind, TraceFetchKind::Empty);
        assert_eq!(resp.mode(), None);
        assert!(resp.trace.is_none());
    }

    #[test]
    fn test_matches_event_through_embedded_errors() {
        let node_id = EventId::from_hex("0123456789abcdef0123456789abcdef").unwrap();
        let error_id = EventId::from_hex("ffffffffffffffffffffffffffffffff").unwrap();
        let other_id = EventId::from_hex("00000000000000000000000000000001").unwrap();

        let node = TraceNode {
            event_id: node_id,
            parent_event_id: None,
            generation: Some(0),
            project_id: 1,
            duration_ms: 10.0,
            errors: vec![EmbeddedError {
                event_id: error_id,
                project_id: 1,
            }],
        };

        assert!(node.matches_event(node_id));
        assert!(node.matches_event(error_id));
        assert!(!node.matches_event(other_id));
    }
}
