//! Parse a trace fetch response and print the current event's relatives.
//!
//! Run with: cargo run --example parse_trace

use retrace::TraceWalker;
use retrace_protocol::{EventId, TraceFetchResponse};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let response: TraceFetchResponse = serde_json::from_str(
        r#"{
            "type": "full",
            "trace": [
                {"event_id": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "generation": 0,
                 "project_id": 1, "duration_ms": 900.0},
                {"event_id": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb", "generation": 1,
                 "parent_event_id": "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                 "project_id": 1, "duration_ms": 450.0},
                {"event_id": "cccccccccccccccccccccccccccccccc", "generation": 2,
                 "parent_event_id": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                 "project_id": 2, "duration_ms": 120.0},
                {"event_id": "dddddddddddddddddddddddddddddddd", "generation": 2,
                 "parent_event_id": "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                 "project_id": 2, "duration_ms": 310.0}
            ]
        }"#,
    )?;

    let current = EventId::from_hex("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb")?;

    let walker = TraceWalker::new();
    let view = match walker.parse_response(&response, current) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("cannot build trace view: {err}");
            return Ok(());
        }
    };

    println!("current: {}", view.current.event_id);
    if let Some(parent) = view.parent {
        println!("parent:  {}", parent.event_id);
    }
    if let Some(root) = view.root {
        println!("root:    {}", root.event_id);
    }
    for child in &view.children {
        println!("child:   {} ({}ms)", child.event_id, child.duration_ms);
    }

    Ok(())
}
