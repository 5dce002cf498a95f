use serde::{Deserialize, Serialize};

use super::fields::EmployeeField;
use crate::shared::collection::ID_KEY;
use crate::shared::field::LogicalField;
use crate::shared::record::{value_to_text, Record};

/// One roster entry. The raw record is kept as-is so unknown columns
/// survive a round trip through the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Employee {
    pub record: Record,
}

impl Employee {
    pub fn new(record: Record) -> Self {
        Self { record }
    }

    /// Trimmed text of a logical field.
    pub fn get(&self, field: EmployeeField) -> String {
        field.trimmed(&self.record)
    }

    pub fn id(&self) -> Option<String> {
        self.record.get(ID_KEY).map(value_to_text)
    }

    pub fn full_name(&self) -> String {
        self.get(EmployeeField::FullName)
    }

    /// Email as used for matching: trimmed and lower-cased.
    pub fn email(&self) -> String {
        normalize_email(&EmployeeField::Email.text(&self.record))
    }

    pub fn title(&self) -> String {
        self.get(EmployeeField::Title)
    }

    pub fn department(&self) -> String {
        self.get(EmployeeField::Department)
    }

    pub fn team(&self) -> String {
        self.get(EmployeeField::Team)
    }

    pub fn sale_mar_team(&self) -> String {
        self.get(EmployeeField::SaleMarTeam)
    }

    pub fn branch(&self) -> String {
        self.get(EmployeeField::Branch)
    }

    pub fn status(&self) -> String {
        self.get(EmployeeField::Status)
    }

    pub fn phone(&self) -> String {
        self.get(EmployeeField::Phone)
    }
}

impl From<Record> for Employee {
    fn from(record: Record) -> Self {
        Self::new(record)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Case-insensitive email lookup. Blank emails never match.
pub fn find_by_email<'a>(roster: &'a [Employee], email: &str) -> Option<&'a Employee> {
    let wanted = normalize_email(email);
    if wanted.is_empty() {
        return None;
    }
    roster.iter().find(|e| e.email() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee(value: serde_json::Value) -> Employee {
        Employee::new(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_find_by_email_is_case_insensitive_and_trimmed() {
        let roster = vec![
            employee(json!({"Email": "a@lumi.vn", "Họ_và_tên": "Nguyễn A"})),
            employee(json!({"email": " B@Lumi.VN ", "Họ và tên": "Trần B"})),
        ];
        let found = find_by_email(&roster, "  b@lumi.vn").unwrap();
        assert_eq!(found.full_name(), "Trần B");
        assert!(find_by_email(&roster, "c@lumi.vn").is_none());
    }

    #[test]
    fn test_blank_email_never_matches() {
        let roster = vec![employee(json!({"Họ_và_tên": "No Mail"}))];
        assert!(find_by_email(&roster, "   ").is_none());
    }

    #[test]
    fn test_accessors_trim() {
        let e = employee(json!({"Vị trí": " NV ", "Team": "Team 1 ", "id": "k1"}));
        assert_eq!(e.title(), "NV");
        assert_eq!(e.team(), "Team 1");
        assert_eq!(e.id().as_deref(), Some("k1"));
    }

    #[test]
    fn test_serializes_as_plain_record() {
        let e = employee(json!({"Email": "a@lumi.vn"}));
        let text = serde_json::to_string(&e).unwrap();
        assert_eq!(text, r#"{"Email":"a@lumi.vn"}"#);
    }
}
