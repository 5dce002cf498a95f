//! Field resolution over records whose keys come in several spellings
//! (`Mã_đơn_hàng` / `Mã đơn hàng`, `Bộ_phận` / `Bộ phận` / `Bo_phan`, ...).
//!
//! Call sites name a logical field; the literal key candidates live in one
//! place per field catalog (see `OrderField`, `EmployeeField`).

use serde_json::Value;

use super::record::{is_present, value_to_text, Record};

/// Return the first present value among `keys`, in priority order.
pub fn resolve_value<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_present(value))
}

/// Like [`resolve_value`], stringified; `""` when no candidate is present.
pub fn resolve(record: &Record, keys: &[&str]) -> String {
    resolve_value(record, keys)
        .map(value_to_text)
        .unwrap_or_default()
}

/// A logical field backed by an ordered list of literal key spellings.
pub trait LogicalField {
    /// Candidate keys, highest priority first.
    fn keys(&self) -> &'static [&'static str];

    fn value<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        resolve_value(record, self.keys())
    }

    fn text(&self, record: &Record) -> String {
        resolve(record, self.keys())
    }

    fn trimmed(&self, record: &Record) -> String {
        self.text(record).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_resolve_skips_empty_candidates() {
        let r = record(json!({"A": "", "B": "x"}));
        assert_eq!(resolve(&r, &["A", "B"]), "x");
    }

    #[test]
    fn test_resolve_skips_null_and_missing() {
        let r = record(json!({"A": null, "C": "z"}));
        assert_eq!(resolve(&r, &["A", "B", "C"]), "z");
    }

    #[test]
    fn test_resolve_first_present_wins() {
        let r = record(json!({"A": "first", "B": "second"}));
        assert_eq!(resolve(&r, &["A", "B"]), "first");
        assert_eq!(resolve(&r, &["B", "A"]), "second");
    }

    #[test]
    fn test_resolve_returns_empty_when_nothing_matches() {
        let r = record(json!({"X": "1"}));
        assert_eq!(resolve(&r, &["A", "B"]), "");
        assert_eq!(resolve(&r, &[]), "");
        assert!(resolve_value(&r, &["A"]).is_none());
    }

    #[test]
    fn test_resolve_keeps_zero() {
        let r = record(json!({"A": 0, "B": 5}));
        assert_eq!(resolve(&r, &["A", "B"]), "0");
    }

    #[test]
    fn test_whitespace_is_present_but_trimmed_helper_strips_it() {
        struct Name;
        impl LogicalField for Name {
            fn keys(&self) -> &'static [&'static str] {
                &["name", "Name"]
            }
        }
        let r = record(json!({"name": "  Nguyen A "}));
        assert_eq!(Name.text(&r), "  Nguyen A ");
        assert_eq!(Name.trimmed(&r), "Nguyen A");
    }
}
