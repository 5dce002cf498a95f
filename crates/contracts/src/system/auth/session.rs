use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::roster::{find_by_email, Employee};

/// Local-storage key holding the signed-in roster record.
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// The signed-in identity: the roster record matched at login, persisted
/// verbatim. Its presence is the authentication signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser {
    pub employee: Employee,
}

impl SessionUser {
    pub fn new(employee: Employee) -> Self {
        Self { employee }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn email(&self) -> String {
        self.employee.email()
    }

    pub fn display_name(&self) -> String {
        let name = self.employee.full_name();
        if name.is_empty() {
            "Người dùng".to_string()
        } else {
            name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    EmptyEmail,
    NotFound,
}

impl LoginError {
    pub fn message(&self) -> &'static str {
        match self {
            LoginError::EmptyEmail => "Vui lòng nhập Email làm việc",
            LoginError::NotFound => "Email không tồn tại trong hệ thống nhân sự",
        }
    }
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Sign in by work email against the roster.
pub fn login(request: &LoginRequest, roster: &[Employee]) -> Result<SessionUser, LoginError> {
    if request.email.trim().is_empty() {
        return Err(LoginError::EmptyEmail);
    }
    find_by_email(roster, &request.email)
        .cloned()
        .map(SessionUser::new)
        .ok_or(LoginError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster() -> Vec<Employee> {
        vec![Employee::new(
            json!({"Email": "Lan@Lumi.vn", "Họ_và_tên": "Lan", "Bộ_phận": "MKT"})
                .as_object()
                .cloned()
                .unwrap(),
        )]
    }

    #[test]
    fn test_login_matches_case_insensitively() {
        let req = LoginRequest { email: " lan@lumi.VN ".into() };
        let user = login(&req, &roster()).unwrap();
        assert_eq!(user.display_name(), "Lan");
        assert_eq!(user.email(), "lan@lumi.vn");
    }

    #[test]
    fn test_login_errors() {
        let empty = LoginRequest { email: "   ".into() };
        assert_eq!(login(&empty, &roster()), Err(LoginError::EmptyEmail));
        assert_eq!(LoginError::EmptyEmail.to_string(), "Vui lòng nhập Email làm việc");

        let unknown = LoginRequest { email: "x@lumi.vn".into() };
        assert_eq!(login(&unknown, &roster()), Err(LoginError::NotFound));
    }

    #[test]
    fn test_session_json_keeps_all_roster_columns() {
        let user = login(&LoginRequest { email: "lan@lumi.vn".into() }, &roster()).unwrap();
        let json = user.to_json().unwrap();
        let restored = SessionUser::from_json(&json).unwrap();
        assert_eq!(restored, user);
        assert!(json.contains("Bộ_phận"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SessionUser::from_json("not json").is_err());
        assert!(SessionUser::from_json("[1,2]").is_err());
    }
}
