//! Who may see which orders.
//!
//! The context is recomputed on every load from the stored identity and a
//! fresh roster; it is never persisted.

use std::collections::BTreeSet;

use super::role::{normalize_department, Role};
use crate::domain::a001_employee::roster::{find_by_email, normalize_email, Employee};
use crate::domain::a002_order::fields::RepKind;

/// Team value marking former employees; never grants team visibility.
pub const DEPARTED_TEAM: &str = "Đã nghỉ";

pub const ADMIN_GREETING: &str = "Xin chào Admin - Toàn quyền hệ thống";

#[derive(Debug, Clone, PartialEq)]
pub struct AccessContext {
    /// Matched roster entry; `None` for the administrator and for
    /// unresolved identities.
    pub current_employee: Option<Employee>,
    /// Department after `CSKH` → `Sale`.
    pub department: Option<String>,
    pub role: Role,
    /// `None` means no restriction.
    pub allowed_names: Option<BTreeSet<String>>,
    /// Greeting on success, diagnostic otherwise.
    pub greeting: String,
}

/// Row restriction the context boils down to.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessScope<'a> {
    Unrestricted,
    /// Rows whose rep equals the viewer's own name.
    Own { rep: Option<RepKind>, name: String },
    /// Rows whose rep is one of `names`.
    Names { rep: Option<RepKind>, names: &'a BTreeSet<String> },
}

impl AccessContext {
    pub fn unrestricted(greeting: impl Into<String>) -> Self {
        Self {
            current_employee: None,
            department: None,
            role: Role::Admin,
            allowed_names: None,
            greeting: greeting.into(),
        }
    }

    fn unresolved(email: &str) -> Self {
        Self {
            current_employee: None,
            department: None,
            role: Role::Unscoped,
            allowed_names: None,
            greeting: format!("Không tìm thấy Email: {}", email),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.current_employee.is_some()
    }

    pub fn own_name(&self) -> String {
        self.current_employee
            .as_ref()
            .map(Employee::full_name)
            .unwrap_or_default()
    }

    /// The row restriction in force. Requires a restricted role, an
    /// allow-list and a non-empty department.
    pub fn scope(&self) -> AccessScope<'_> {
        let (Some(names), Some(department)) = (&self.allowed_names, &self.department) else {
            return AccessScope::Unrestricted;
        };
        if department.is_empty() || !self.role.is_restricted() {
            return AccessScope::Unrestricted;
        }
        let rep = RepKind::for_department(department);
        match self.role {
            Role::Staff => AccessScope::Own {
                rep,
                name: self.own_name(),
            },
            _ => AccessScope::Names { rep, names },
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.scope() != AccessScope::Unrestricted
    }

    /// Department whose rep column is restricted for this viewer.
    pub fn restricted_rep(&self) -> Option<RepKind> {
        match self.scope() {
            AccessScope::Own { rep, .. } | AccessScope::Names { rep, .. } => rep,
            AccessScope::Unrestricted => None,
        }
    }
}

/// Build the access context for a signed-in identity.
///
/// `session_email` is the stored identity's email; `admin_email` the
/// configured administrator address.
pub fn resolve_access(session_email: &str, roster: &[Employee], admin_email: &str) -> AccessContext {
    let email = normalize_email(session_email);
    if !email.is_empty() && email == normalize_email(admin_email) {
        return AccessContext::unrestricted(ADMIN_GREETING);
    }

    let Some(employee) = find_by_email(roster, &email) else {
        return AccessContext::unresolved(&email);
    };

    let name = employee.full_name();
    let raw_department = employee.department();
    let department = normalize_department(&raw_department);
    let role = Role::classify(&employee.title());

    let mut allowed = BTreeSet::new();
    match role {
        Role::BranchLeader => {
            let branch = employee.branch().to_lowercase();
            if !branch.is_empty() {
                allowed.extend(
                    roster
                        .iter()
                        .filter(|e| e.branch().to_lowercase() == branch)
                        .map(Employee::full_name),
                );
            }
        }
        Role::TeamLeader => {
            let team = grouping_team(employee.team());
            let sale_mar_team = grouping_team(employee.sale_mar_team());
            allowed.extend(
                roster
                    .iter()
                    .filter(|e| {
                        team.as_ref().is_some_and(|t| e.team() == *t)
                            || sale_mar_team.as_ref().is_some_and(|t| e.sale_mar_team() == *t)
                    })
                    .map(Employee::full_name),
            );
        }
        _ => {}
    }
    allowed.insert(name.clone());
    allowed.retain(|n| !n.is_empty());

    AccessContext {
        greeting: greeting(&name, &raw_department),
        current_employee: Some(employee.clone()),
        department: Some(department),
        role,
        allowed_names: (!allowed.is_empty()).then_some(allowed),
    }
}

/// A team value that groups colleagues; blank and departed never do.
fn grouping_team(team: String) -> Option<String> {
    (!team.is_empty() && team != DEPARTED_TEAM).then_some(team)
}

/// `Xin chào <name> - <department>`; the suffix is dropped without a
/// department.
pub fn greeting(name: &str, department: &str) -> String {
    if department.is_empty() {
        format!("Xin chào {}", name)
    } else {
        format!("Xin chào {} - {}", name, department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const ADMIN: &str = "admin@lumi.vn";

    fn roster(value: Value) -> Vec<Employee> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| Employee::new(v.as_object().cloned().unwrap()))
            .collect()
    }

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<Employee> {
        roster(json!([
            {"Email": "an@lumi.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "Sale", "Team": "T1", "chi_nhánh": "HCM"},
            {"Email": "binh@lumi.vn", "Họ_và_tên": "Bình", "Vị_trí": "Leader", "Bộ_phận": "Sale", "Team": "T1", "chi_nhánh": "HCM"},
            {"Email": "chi@lumi.vn", "Họ_và_tên": "Chi", "Vị_trí": "NV", "Bộ_phận": "Sale", "Team": "T2", "chi_nhánh": "hcm"},
            {"Email": "dung@lumi.vn", "Họ_và_tên": "Dũng", "Vị_trí": "NV", "Bộ_phận": "Sale", "Team": "Đã nghỉ", "chi_nhánh": "HN"},
            {"Email": "em@lumi.vn", "Họ_và_tên": "Em", "Vị_trí": "Sale Leader", "Bộ_phận": "CSKH", "Team": "T9", "chi_nhánh": "HCM"},
            {"Email": "gia@lumi.vn", "Họ_và_tên": "Gia", "Vị_trí": "Leader", "Bộ_phận": "Sale", "Team": "Đã nghỉ"},
            {"Email": "ha@lumi.vn", "Họ_và_tên": "Hà", "Vị_trí": "Kế toán trưởng", "Bộ_phận": "Kế toán"}
        ]))
    }

    #[test]
    fn test_admin_email_bypasses_roster() {
        let ctx = resolve_access(" Admin@Lumi.vn ", &[], ADMIN);
        assert_eq!(ctx.role, Role::Admin);
        assert!(ctx.allowed_names.is_none());
        assert_eq!(ctx.greeting, ADMIN_GREETING);
        assert_eq!(ctx.scope(), AccessScope::Unrestricted);
    }

    #[test]
    fn test_unknown_email_is_unresolved_and_unrestricted() {
        let ctx = resolve_access("Nobody@lumi.vn", &sample(), ADMIN);
        assert!(!ctx.is_resolved());
        assert!(ctx.allowed_names.is_none());
        assert_eq!(ctx.greeting, "Không tìm thấy Email: nobody@lumi.vn");
    }

    #[test]
    fn test_staff_allows_only_self() {
        let ctx = resolve_access("AN@lumi.vn", &sample(), ADMIN);
        assert_eq!(ctx.role, Role::Staff);
        assert_eq!(ctx.department.as_deref(), Some("Sale"));
        assert_eq!(ctx.allowed_names, Some(names(&["An"])));
        assert_eq!(ctx.greeting, "Xin chào An - Sale");
        assert_eq!(
            ctx.scope(),
            AccessScope::Own { rep: Some(RepKind::Sale), name: "An".to_string() }
        );
    }

    #[test]
    fn test_team_leader_gets_same_team() {
        let ctx = resolve_access("binh@lumi.vn", &sample(), ADMIN);
        assert_eq!(ctx.role, Role::TeamLeader);
        assert_eq!(ctx.allowed_names, Some(names(&["An", "Bình"])));
    }

    #[test]
    fn test_team_leader_also_matches_sale_marketing_team() {
        let mut people = sample();
        people.push(Employee::new(
            json!({"Email": "khoa@lumi.vn", "Họ_và_tên": "Khoa", "Vị_trí": "MKT Leader", "Bộ_phận": "MKT", "Team": "M1", "Team_Sale_mar": "SM1"})
                .as_object()
                .cloned()
                .unwrap(),
        ));
        people.push(Employee::new(
            json!({"Email": "lan@lumi.vn", "Họ_và_tên": "Lan", "Vị_trí": "NV", "Bộ_phận": "MKT", "Team": "M2", "Team_Sale_mar": "SM1"})
                .as_object()
                .cloned()
                .unwrap(),
        ));
        let ctx = resolve_access("khoa@lumi.vn", &people, ADMIN);
        assert_eq!(ctx.role, Role::TeamLeader);
        assert_eq!(ctx.allowed_names, Some(names(&["Khoa", "Lan"])));
    }

    #[test]
    fn test_departed_team_grants_only_self() {
        let ctx = resolve_access("gia@lumi.vn", &sample(), ADMIN);
        assert_eq!(ctx.role, Role::TeamLeader);
        assert_eq!(ctx.allowed_names, Some(names(&["Gia"])));
    }

    #[test]
    fn test_branch_leader_matches_branch_case_insensitively() {
        let ctx = resolve_access("em@lumi.vn", &sample(), ADMIN);
        assert_eq!(ctx.role, Role::BranchLeader);
        assert_eq!(ctx.department.as_deref(), Some("Sale"));
        assert_eq!(ctx.greeting, "Xin chào Em - CSKH");
        assert_eq!(ctx.allowed_names, Some(names(&["An", "Bình", "Chi", "Em"])));
    }

    #[test]
    fn test_other_titles_are_unscoped() {
        let ctx = resolve_access("ha@lumi.vn", &sample(), ADMIN);
        assert_eq!(ctx.role, Role::Unscoped);
        assert_eq!(ctx.allowed_names, Some(names(&["Hà"])));
        assert_eq!(ctx.scope(), AccessScope::Unrestricted);
    }

    #[test]
    fn test_nameless_staff_is_unrestricted() {
        let roster = roster(json!([{"Email": "x@lumi.vn", "Vị_trí": "NV", "Bộ_phận": "Sale"}]));
        let ctx = resolve_access("x@lumi.vn", &roster, ADMIN);
        assert!(ctx.allowed_names.is_none());
        assert!(!ctx.is_restricted());
    }

    #[test]
    fn test_empty_department_means_no_row_filter() {
        let roster = roster(json!([{"Email": "y@lumi.vn", "Họ_và_tên": "Y", "Vị_trí": "NV"}]));
        let ctx = resolve_access("y@lumi.vn", &roster, ADMIN);
        assert_eq!(ctx.greeting, "Xin chào Y");
        assert!(!ctx.is_restricted());
    }
}
