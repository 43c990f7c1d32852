//! Depth-bounded dump of a raw JSON record

use serde_json::{Map, Value};

/// Levels below the root that are printed in full.
pub const DUMP_DEPTH: usize = 2;

const OBJECT_PLACEHOLDER: &str = "[Object]";
const ARRAY_PLACEHOLDER: &str = "[Array]";

/// Copies `value`, replacing containers nested deeper than `max_depth`
/// with a placeholder string.
pub fn bounded(value: &Value, max_depth: usize) -> Value {
    bounded_at(value, 0, max_depth)
}

fn bounded_at(value: &Value, level: usize, max_depth: usize) -> Value {
    match value {
        Value::Object(_) if level > max_depth => Value::String(OBJECT_PLACEHOLDER.into()),
        Value::Array(_) if level > max_depth => Value::String(ARRAY_PLACEHOLDER.into()),
        Value::Object(fields) => {
            let fields: Map<String, Value> = fields
                .iter()
                .map(|(k, v)| (k.clone(), bounded_at(v, level + 1, max_depth)))
                .collect();
            Value::Object(fields)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| bounded_at(v, level + 1, max_depth))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
