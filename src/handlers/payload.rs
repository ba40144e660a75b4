//! Field extraction from open-ended JSON request bodies.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::timeslot::{parse_instant, DEFAULT_TIMESLOT_TITLE};
use crate::models::EventTimeslot;

/// A string field; other JSON types are ignored.
pub fn text(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The first list found under any of `keys`, each element converted to text.
///
/// Objects contribute their `id` member, so `[{ "id": "s1", "name": "Rust" }]`
/// yields `["s1"]`. Nulls and objects without an id are dropped.
pub fn text_list(payload: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_array))
        .map(|items| items.iter().filter_map(element_text).collect())
        .unwrap_or_default()
}

fn element_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj.get("id").and_then(element_text),
        other => Some(other.to_string()),
    }
}

/// Builds a timeslot for `event_id`, or `None` when the entry has no parseable start.
pub fn timeslot_from(entry: &Value, event_id: &str) -> Option<EventTimeslot> {
    let obj = entry.as_object()?;

    let title = obj
        .get("title")
        .and_then(element_text)
        .unwrap_or_else(|| DEFAULT_TIMESLOT_TITLE.to_string());

    let start = match obj.get("start").and_then(element_text) {
        Some(raw) => match parse_instant(&raw) {
            Some(start) => start,
            None => {
                warn!(event_id = %event_id, title = %title, start = %raw, "Skipping timeslot with unparseable start");
                return None;
            }
        },
        None => {
            warn!(event_id = %event_id, title = %title, "Skipping timeslot without start");
            return None;
        }
    };

    let end = obj.get("end").and_then(element_text).and_then(|raw| {
        let parsed = parse_instant(&raw);
        if parsed.is_none() {
            warn!(event_id = %event_id, end = %raw, "Ignoring unparseable timeslot end");
        }
        parsed
    });

    Some(EventTimeslot {
        id: String::new(),
        event_id: event_id.to_string(),
        title: Some(title),
        start,
        end,
        all_day: obj.get("allDay").and_then(Value::as_bool).unwrap_or(false),
    })
}
