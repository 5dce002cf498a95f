//! Partial updates of one HR record.

use serde_json::Value;

use super::fields::EmployeeField;
use crate::shared::collection::ID_KEY;
use crate::shared::record::Record;

/// Fields exposed on the edit form, in display order.
pub const EDITABLE_FIELDS: [EmployeeField; 13] = [
    EmployeeField::FullName,
    EmployeeField::Title,
    EmployeeField::Department,
    EmployeeField::Branch,
    EmployeeField::Status,
    EmployeeField::Phone,
    EmployeeField::Email,
    EmployeeField::Gender,
    EmployeeField::Hometown,
    EmployeeField::MaritalStatus,
    EmployeeField::IdNumber,
    EmployeeField::IdIssueDate,
    EmployeeField::IdIssuePlace,
];

/// Body for a merge-PATCH: every field of `edited` whose value differs from
/// `original`. The document id is never sent.
pub fn changed_fields(original: &Record, edited: &Record) -> Record {
    edited
        .iter()
        .filter(|(key, _)| key.as_str() != ID_KEY)
        .filter(|(key, value)| original.get(key.as_str()) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Set a form field on a draft record under its storage key.
pub fn set_field(draft: &mut Record, field: EmployeeField, text: String) {
    draft.insert(field.storage_key().to_string(), Value::String(text));
}

/// Merge a successful PATCH body back into the displayed record.
pub fn apply_changes(record: &mut Record, changes: &Record) {
    for (key, value) in changes {
        record.insert(key.clone(), value.clone());
    }
}
