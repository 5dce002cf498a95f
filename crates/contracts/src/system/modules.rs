//! Application modules and block-based access to them.
//!
//! Every employee belongs to zero or more blocks, derived from title and
//! department by case-insensitive patterns. A module is open to a block
//! either through the admin-edited override map or, when the map has no
//! entry for the module, through the built-in defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::fields::EmployeeField;
use crate::domain::a001_employee::roster::{normalize_email, Employee};
use crate::shared::field::LogicalField;

/// Local-storage key of the override map.
pub const PERMISSIONS_STORAGE_KEY: &str = "module_permissions";

/// Title assumed when an employee has none.
const DEFAULT_TITLE: &str = "Thành viên";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Block {
    #[serde(rename = "CEO")]
    Ceo,
    #[serde(rename = "CSKH")]
    Cskh,
    SaleOrder,
    #[serde(rename = "HR")]
    Hr,
    KeToan,
    #[serde(rename = "MKT")]
    Mkt,
}

impl Block {
    pub const ALL: [Block; 6] = [
        Block::Ceo,
        Block::Cskh,
        Block::SaleOrder,
        Block::Hr,
        Block::KeToan,
        Block::Mkt,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Block::Ceo => "CEO",
            Block::Cskh => "CSKH",
            Block::SaleOrder => "SaleOrder",
            Block::Hr => "HR",
            Block::KeToan => "KeToan",
            Block::Mkt => "MKT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Block::Ceo => "Khối CEO (Sếp)",
            Block::Cskh => "Khối CSKH",
            Block::SaleOrder => "Khối Sale & Vận đơn",
            Block::Hr => "Khối HR & Nhân sự",
            Block::KeToan => "Khối Tài chính/Kế toán",
            Block::Mkt => "Khối Marketing",
        }
    }

    /// Whether an employee with this (title, department) is in the block.
    fn contains(&self, title: &str, department: &str) -> bool {
        let t = |p: &str| title.contains(p);
        let d = |p: &str| department.contains(p);
        match self {
            Block::Ceo => t("ceo") || d("ceo") || t("giám đốc"),
            Block::Cskh => d("cskh") || t("cskh"),
            Block::SaleOrder => d("sale") || t("sale") || d("vận đơn") || d("vận hành"),
            Block::Hr => d("hr") || d("nhân sự") || t("hr"),
            Block::KeToan => d("kế toán") || d("tài chính") || t("kế toán") || d("finance"),
            Block::Mkt => d("mkt") || d("marketing") || t("mkt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKey {
    Dashboard,
    Goals,
    Crm,
    Orders,
    OrdersEdit,
    NewOrder,
    Hr,
    Finance,
    Marketing,
    Settings,
}

impl ModuleKey {
    pub fn id(&self) -> &'static str {
        match self {
            ModuleKey::Dashboard => "dashboard",
            ModuleKey::Goals => "goals",
            ModuleKey::Crm => "crm",
            ModuleKey::Orders => "orders",
            ModuleKey::OrdersEdit => "orders_edit",
            ModuleKey::NewOrder => "new-order",
            ModuleKey::Hr => "hr",
            ModuleKey::Finance => "finance",
            ModuleKey::Marketing => "marketing",
            ModuleKey::Settings => "settings",
        }
    }

    /// Key permissions are stored under. Order editing shares the orders
    /// permission.
    pub fn permission_id(&self) -> &'static str {
        match self {
            ModuleKey::OrdersEdit => ModuleKey::Orders.id(),
            other => other.id(),
        }
    }

    pub fn is_admin_only(&self) -> bool {
        matches!(self, ModuleKey::Settings)
    }

    fn default_block(&self) -> Option<Block> {
        match self {
            ModuleKey::Dashboard | ModuleKey::Goals => Some(Block::Ceo),
            ModuleKey::Crm => Some(Block::Cskh),
            ModuleKey::Orders | ModuleKey::OrdersEdit | ModuleKey::NewOrder => Some(Block::SaleOrder),
            ModuleKey::Hr => Some(Block::Hr),
            ModuleKey::Finance => Some(Block::KeToan),
            ModuleKey::Marketing => Some(Block::Mkt),
            ModuleKey::Settings => None,
        }
    }
}

/// Permission facts about one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAccess {
    pub is_admin: bool,
    pub blocks: Vec<Block>,
}

impl UserAccess {
    pub fn of(employee: &Employee, admin_email: &str) -> Self {
        let record = &employee.record;
        let title = match EmployeeField::Title.text(record) {
            t if t.is_empty() => DEFAULT_TITLE.to_string(),
            t => t,
        }
        .to_lowercase();
        let department = EmployeeField::Department.text(record).to_lowercase();
        let email = employee.email();

        let is_admin = (!email.is_empty() && email == normalize_email(admin_email))
            || title.contains("admin");
        let blocks = Block::ALL
            .into_iter()
            .filter(|b| b.contains(&title, &department))
            .collect();

        Self { is_admin, blocks }
    }

    pub fn in_block(&self, block: Block) -> bool {
        self.blocks.contains(&block)
    }
}

/// Admin-edited map: module permission id → allowed blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePermissions(pub BTreeMap<String, Vec<Block>>);

impl ModulePermissions {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn allowed(&self, permission_id: &str) -> &[Block] {
        self.0.get(permission_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn toggle(&mut self, permission_id: &str, block: Block) {
        let blocks = self.0.entry(permission_id.to_string()).or_default();
        if let Some(pos) = blocks.iter().position(|b| *b == block) {
            blocks.remove(pos);
        } else {
            blocks.push(block);
        }
    }
}

/// Whether `user` may open `module`.
pub fn has_module_access(module: ModuleKey, user: &UserAccess, permissions: &ModulePermissions) -> bool {
    if user.is_admin {
        return true;
    }
    if module.is_admin_only() {
        return false;
    }
    let overrides = permissions.allowed(module.permission_id());
    if overrides.is_empty() {
        return module.default_block().is_some_and(|b| user.in_block(b));
    }
    overrides.iter().any(|b| user.in_block(*b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ADMIN: &str = "boss@lumi.vn";

    fn access(value: serde_json::Value) -> UserAccess {
        let employee = Employee::new(value.as_object().cloned().unwrap());
        UserAccess::of(&employee, ADMIN)
    }

    #[test]
    fn test_blocks_from_title_and_department() {
        let u = access(json!({"Vị trí": "Giám Đốc", "Bộ phận": "Ban giám đốc"}));
        assert_eq!(u.blocks, vec![Block::Ceo]);

        let u = access(json!({"Vị_trí": "NV", "Bộ_phận": "Vận Hành"}));
        assert_eq!(u.blocks, vec![Block::SaleOrder]);

        let u = access(json!({"Vị_trí": "NV", "Bộ_phận": "CSKH"}));
        assert_eq!(u.blocks, vec![Block::Cskh]);

        let u = access(json!({"Vị_trí": "Leader", "Bộ_phận": "Marketing"}));
        assert_eq!(u.blocks, vec![Block::Mkt]);
    }

    #[test]
    fn test_admin_by_email_or_title() {
        assert!(access(json!({"Email": "BOSS@lumi.vn"})).is_admin);
        assert!(access(json!({"Vị trí": "System Admin"})).is_admin);
        assert!(!access(json!({"Vị trí": "NV"})).is_admin);
    }

    #[test]
    fn test_default_module_access() {
        let none = ModulePermissions::default();
        let sale = access(json!({"Vị_trí": "NV", "Bộ_phận": "Sale"}));
        assert!(has_module_access(ModuleKey::Orders, &sale, &none));
        assert!(has_module_access(ModuleKey::OrdersEdit, &sale, &none));
        assert!(!has_module_access(ModuleKey::Hr, &sale, &none));
        assert!(!has_module_access(ModuleKey::Settings, &sale, &none));

        let hr = access(json!({"Vị_trí": "NV", "Bộ_phận": "Nhân sự"}));
        assert!(has_module_access(ModuleKey::Hr, &hr, &none));
    }

    #[test]
    fn test_override_replaces_defaults() {
        let mut perms = ModulePermissions::default();
        perms.toggle("orders", Block::Mkt);

        let sale = access(json!({"Vị_trí": "NV", "Bộ_phận": "Sale"}));
        let mkt = access(json!({"Vị_trí": "NV", "Bộ_phận": "MKT"}));
        assert!(!has_module_access(ModuleKey::Orders, &sale, &perms));
        assert!(has_module_access(ModuleKey::OrdersEdit, &mkt, &perms));

        // emptied override falls back to defaults
        perms.toggle("orders", Block::Mkt);
        assert!(has_module_access(ModuleKey::Orders, &sale, &perms));
    }

    #[test]
    fn test_admin_opens_everything() {
        let admin = access(json!({"Email": "boss@lumi.vn"}));
        let perms = ModulePermissions::default();
        assert!(has_module_access(ModuleKey::Settings, &admin, &perms));
        assert!(has_module_access(ModuleKey::Finance, &admin, &perms));
    }

    #[test]
    fn test_permissions_json_uses_block_ids() {
        let perms = ModulePermissions::from_json(r#"{"hr":["HR","KeToan"],"crm":["CSKH"]}"#).unwrap();
        assert_eq!(perms.allowed("hr"), &[Block::Hr, Block::KeToan]);
        assert_eq!(perms.to_json().unwrap(), r#"{"crm":["CSKH"],"hr":["HR","KeToan"]}"#);
        assert!(ModulePermissions::from_json("{oops").is_err());
    }
}
