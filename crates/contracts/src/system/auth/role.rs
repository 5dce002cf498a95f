use serde::{Deserialize, Serialize};

/// Access role derived once from an employee's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Sees everything.
    Admin,
    /// `Sale Leader`: every employee of the same branch.
    BranchLeader,
    /// Any other leader: every employee of the same team.
    TeamLeader,
    /// `NV` or blank title: own records only.
    Staff,
    /// Titles outside the known set. Not row-restricted.
    Unscoped,
}

pub const STAFF_TITLE: &str = "NV";
pub const BRANCH_LEADER_TITLE: &str = "Sale Leader";

impl Role {
    pub fn classify(title: &str) -> Role {
        let title = title.trim();
        if title.is_empty() || title == STAFF_TITLE {
            return Role::Staff;
        }
        if title == BRANCH_LEADER_TITLE {
            return Role::BranchLeader;
        }
        let lower = title.to_lowercase();
        if lower.contains("leader") {
            Role::TeamLeader
        } else if lower.contains("admin") {
            Role::Admin
        } else {
            Role::Unscoped
        }
    }

    /// Whether the row filter applies to this role at all.
    pub fn is_restricted(&self) -> bool {
        matches!(self, Role::Staff | Role::TeamLeader | Role::BranchLeader)
    }
}

/// Customer care works the sale pipeline.
pub fn normalize_department(department: &str) -> String {
    let department = department.trim();
    if department == "CSKH" {
        "Sale".to_string()
    } else {
        department.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Role::classify("NV"), Role::Staff);
        assert_eq!(Role::classify("  "), Role::Staff);
        assert_eq!(Role::classify("Sale Leader"), Role::BranchLeader);
        assert_eq!(Role::classify("Leader"), Role::TeamLeader);
        assert_eq!(Role::classify("MKT leader"), Role::TeamLeader);
        assert_eq!(Role::classify("sale leader"), Role::TeamLeader);
        assert_eq!(Role::classify("Admin"), Role::Admin);
        assert_eq!(Role::classify("Giám đốc"), Role::Unscoped);
        assert_eq!(Role::classify("nv"), Role::Unscoped);
    }

    #[test]
    fn test_restricted_roles() {
        assert!(Role::Staff.is_restricted());
        assert!(Role::TeamLeader.is_restricted());
        assert!(Role::BranchLeader.is_restricted());
        assert!(!Role::Admin.is_restricted());
        assert!(!Role::Unscoped.is_restricted());
    }

    #[test]
    fn test_normalize_department() {
        assert_eq!(normalize_department("CSKH"), "Sale");
        assert_eq!(normalize_department(" MKT "), "MKT");
        assert_eq!(normalize_department("cskh"), "cskh");
    }
}
