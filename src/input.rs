use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::parser::Item;

/// Load input items from a file holding a JSON array of objects, a single
/// JSON object, or newline-delimited JSON objects. The whole-file parse is
/// tried first; NDJSON is the fallback when it fails.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(values)) => values.into_iter().map(into_item).collect(),
        Ok(Value::Object(map)) => Ok(vec![map]),
        Ok(other) => bail!("unsupported top-level JSON type: {}", type_name(&other)),
        Err(_) => {
            debug!(
                "{}: whole-file JSON parse failed, trying newline-delimited",
                path.display()
            );
            raw.lines()
                .enumerate()
                .filter(|(_, l)| !l.trim().is_empty())
                .map(|(n, l)| {
                    let value: Value = serde_json::from_str(l)
                        .with_context(|| format!("invalid JSON on line {}", n + 1))?;
                    into_item(value)
                })
                .collect()
        }
    }
}

fn into_item(value: Value) -> Result<Item> {
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("expected a JSON object, got {}", type_name(&other)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new("tests/fixtures").join(name)
    }

    #[test]
    fn array_payload() {
        let items = load_items(&fixture("payload_array.json")).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["id"], "evt-001");
    }

    #[test]
    fn single_object_payload() {
        let items = load_items(&fixture("payload_single.json")).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].contains_key("event"));
    }

    #[test]
    fn ndjson_payload() {
        let items = load_items(&fixture("payload.ndjson")).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["id"], "nd-002");
    }

    #[test]
    fn scalar_top_level_rejected() {
        let err = load_items(&fixture("payload_scalar.json")).unwrap_err();
        assert!(err.to_string().contains("unsupported top-level JSON type"));
    }

    #[test]
    fn garbage_rejected() {
        let err = load_items(&fixture("payload_garbage.txt")).unwrap_err();
        assert!(err.to_string().contains("invalid JSON on line 1"));
    }

    #[test]
    fn missing_file_rejected() {
        assert!(load_items(Path::new("tests/fixtures/does_not_exist.json")).is_err());
    }
}
