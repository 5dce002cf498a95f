use serde_json::{Map, Value};

/// One loosely-typed document from the remote store (an order row or an
/// employee). Keys are not normalized upstream.
pub type Record = Map<String, Value>;

/// A value counts as "present" unless it is `null` or the empty string.
/// `0` and `false` are present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Stringify a scalar the way it is shown in tables and searched.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Lowercased concatenation of every field value, used by free-text search.
pub fn searchable_text(record: &Record) -> String {
    record
        .values()
        .map(|v| value_to_text(v).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
