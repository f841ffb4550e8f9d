//! Outbound statistics encoding.

use actstat_accumulator::ActionAverage;
use serde_json::{json, Value};

/// Serialize a snapshot as `[{"action": "jump", "avg": 150.0}, ...]`.
///
/// Entries keep the order they are given in.
pub fn encode_snapshot(entries: &[ActionAverage]) -> String {
    Value::Array(
        entries
            .iter()
            .map(|entry| json!({ "action": entry.action, "avg": entry.average }))
            .collect(),
    )
    .to_string()
}
