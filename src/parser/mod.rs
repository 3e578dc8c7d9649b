pub mod lines;
pub mod report;

use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::warn;

use crate::record::AnomalyRecord;

pub use report::parse_report;

/// One input item: a JSON object with a report text under `event`/`Event`
/// plus arbitrary metadata fields.
pub type Item = Map<String, Value>;

/// Parse every item's report text and stamp pass-through metadata. Items are
/// independent, so they are parsed in parallel; collecting per-item results
/// and flattening keeps the output in input order.
pub fn extract_records(items: &[Item]) -> Vec<AnomalyRecord> {
    items
        .par_iter()
        .map(process_item)
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

fn process_item(item: &Item) -> Vec<AnomalyRecord> {
    let Some(text) = report_text(item) else {
        warn!("skipping item without report text (id: {:?})", item.get("id"));
        return Vec::new();
    };

    let mut records = report::parse_report(text);
    if let Some(id) = item.get("id") {
        for r in &mut records {
            r.source_id = Some(id.clone());
        }
    }
    if let Some(date) = item.get("creation_date") {
        for r in &mut records {
            r.creation_date = Some(date.clone());
        }
    }
    records
}

/// Resolve the report text: `event` when it holds something, otherwise
/// `Event`. An empty, null, or otherwise hollow `event` defers to `Event`;
/// whichever field is chosen must then be a string.
fn report_text(item: &Item) -> Option<&str> {
    let chosen = match item.get("event") {
        Some(v) if has_content(v) => Some(v),
        _ => item.get("Event"),
    };
    chosen.and_then(Value::as_str)
}

fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

// ── Tests ──
