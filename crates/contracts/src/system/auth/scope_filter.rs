use super::access::{AccessContext, AccessScope};
use crate::domain::a002_order::fields::RepKind;
use crate::shared::field::LogicalField;
use crate::shared::record::Record;

fn rep_value(record: &Record, rep: RepKind) -> String {
    rep.field().trimmed(record)
}

/// First pipeline stage: drop the rows the viewer may not see.
///
/// Matching is exact and case-sensitive after trimming. A restricted viewer
/// whose department has no rep column sees nothing.
pub fn apply_access_filter<'a>(records: &'a [Record], ctx: &AccessContext) -> Vec<&'a Record> {
    match ctx.scope() {
        AccessScope::Unrestricted => records.iter().collect(),
        AccessScope::Own { rep: None, .. } | AccessScope::Names { rep: None, .. } => Vec::new(),
        AccessScope::Own { rep: Some(rep), name } => records
            .iter()
            .filter(|r| rep_value(r, rep) == name)
            .collect(),
        AccessScope::Names { rep: Some(rep), names } => records
            .iter()
            .filter(|r| {
                let value = rep_value(r, rep);
                !value.is_empty() && names.contains(&value)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::roster::Employee;
    use crate::system::auth::access::resolve_access;
    use serde_json::{json, Value};

    fn records(value: Value) -> Vec<Record> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    fn roster(value: Value) -> Vec<Employee> {
        records(value).into_iter().map(Employee::new).collect()
    }

    fn codes(rows: &[&Record]) -> Vec<String> {
        rows.iter()
            .map(|r| r["Mã đơn hàng"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn orders() -> Vec<Record> {
        records(json!([
            {"Mã đơn hàng": "1", "Nhân viên Sale": "An "},
            {"Mã đơn hàng": "2", "Nhân_viên_Sale": "An"},
            {"Mã đơn hàng": "3", "Nhân viên Sale": "Bình"},
            {"Mã đơn hàng": "4", "Nhân viên Sale": "an"},
            {"Mã đơn hàng": "5", "Nhân viên Sale": "Chi", "NV Vận đơn": "An"},
            {"Mã đơn hàng": "6"}
        ]))
    }

    #[test]
    fn test_staff_sees_only_own_rows_after_trim() {
        let roster = roster(json!([{"Email": "an@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "Sale"}]));
        let ctx = resolve_access("an@x.vn", &roster, "admin@x.vn");
        let data = orders();
        assert_eq!(codes(&apply_access_filter(&data, &ctx)), vec!["1", "2"]);
    }

    #[test]
    fn test_logistics_staff_uses_logistics_rep() {
        let roster = roster(json!([{"Email": "an@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "Vận Hành"}]));
        let ctx = resolve_access("an@x.vn", &roster, "admin@x.vn");
        let data = orders();
        assert_eq!(codes(&apply_access_filter(&data, &ctx)), vec!["5"]);
    }

    #[test]
    fn test_staff_without_rep_department_sees_nothing() {
        let roster = roster(json!([{"Email": "an@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "HR"}]));
        let ctx = resolve_access("an@x.vn", &roster, "admin@x.vn");
        assert!(apply_access_filter(&orders(), &ctx).is_empty());
    }

    #[test]
    fn test_leader_sees_team_union_and_skips_blank_reps() {
        let roster = roster(json!([
            {"Email": "b@x.vn", "Họ_và_tên": "Bình", "Vị_trí": "Leader", "Bộ_phận": "Sale", "Team": "T1"},
            {"Email": "a@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "Sale", "Team": "T1"},
            {"Email": "c@x.vn", "Họ_và_tên": "Chi", "Vị_trí": "NV", "Bộ_phận": "Sale", "Team": "T2"}
        ]));
        let ctx = resolve_access("b@x.vn", &roster, "admin@x.vn");
        let data = orders();
        assert_eq!(codes(&apply_access_filter(&data, &ctx)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_admin_and_unresolved_see_everything() {
        let data = orders();
        let admin = resolve_access("admin@x.vn", &[], "admin@x.vn");
        assert_eq!(apply_access_filter(&data, &admin).len(), data.len());

        let unknown = resolve_access("ghost@x.vn", &[], "admin@x.vn");
        assert_eq!(apply_access_filter(&data, &unknown).len(), data.len());
    }
}
