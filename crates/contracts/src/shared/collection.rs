use serde_json::Value;

use super::record::Record;

/// Key under which the store's opaque document id is kept on a record.
pub const ID_KEY: &str = "id";

/// Flatten a store response into records.
///
/// The store answers either with a JSON array or with an object keyed by
/// document id. Non-object entries (nulls left by deletions, stray scalars)
/// are dropped. Anything else yields an empty list.
pub fn normalize_collection(value: &Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items.iter().filter_map(|v| v.as_object().cloned()).collect(),
        Value::Object(map) => map.values().filter_map(|v| v.as_object().cloned()).collect(),
        _ => Vec::new(),
    }
}

/// Same as [`normalize_collection`] but keeps the document id under
/// [`ID_KEY`]. A record's own `id` field, if any, wins over the key.
pub fn normalize_collection_with_ids(value: &Value) -> Vec<Record> {
    let entries: Vec<(String, &Value)> = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|(id, v)| {
            let fields = v.as_object()?;
            let mut record = Record::new();
            record.insert(ID_KEY.to_string(), Value::String(id));
            for (k, v) in fields {
                record.insert(k.clone(), v.clone());
            }
            Some(record)
        })
        .collect()
}
