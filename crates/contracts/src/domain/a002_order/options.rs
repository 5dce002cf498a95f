//! Dynamic choices for the multi-select filters, derived from the loaded
//! order set and narrowed by the viewer's access scope.

use std::collections::{BTreeMap, BTreeSet};

use super::fields::RepKind;
use super::filter::{CategoricalFilter, OrderFilter};
use crate::shared::field::LogicalField;
use crate::shared::record::Record;
use crate::system::auth::access::{AccessContext, AccessScope};

impl CategoricalFilter {
    /// The rep column behind this filter, if it is a rep filter.
    pub fn rep_kind(&self) -> Option<RepKind> {
        match self {
            CategoricalFilter::SaleRep => Some(RepKind::Sale),
            CategoricalFilter::MarketingRep => Some(RepKind::Marketing),
            CategoricalFilter::LogisticsRep => Some(RepKind::Logistics),
            _ => None,
        }
    }

    fn for_rep(rep: RepKind) -> CategoricalFilter {
        match rep {
            RepKind::Sale => CategoricalFilter::SaleRep,
            RepKind::Marketing => CategoricalFilter::MarketingRep,
            RepKind::Logistics => CategoricalFilter::LogisticsRep,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions(BTreeMap<CategoricalFilter, Vec<String>>);

impl FilterOptions {
    pub fn get(&self, filter: CategoricalFilter) -> &[String] {
        self.0.get(&filter).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Distinct trimmed non-empty values per filter, sorted. For the rep column
/// of a restricted viewer's own department, only allowed names remain.
pub fn derive_options(records: &[Record], access: &AccessContext) -> FilterOptions {
    let restricted_rep = access.restricted_rep();
    let mut options = BTreeMap::new();

    for filter in CategoricalFilter::ALL {
        let field = filter.field();
        let mut values: BTreeSet<String> = records
            .iter()
            .map(|r| field.trimmed(r))
            .filter(|v| !v.is_empty())
            .collect();

        if let (Some(rep), Some(allowed)) = (restricted_rep, access.allowed_names.as_ref()) {
            if filter.rep_kind() == Some(rep) {
                values.retain(|v| allowed.contains(v));
            }
        }
        options.insert(filter, values.into_iter().collect());
    }
    FilterOptions(options)
}

/// Filters shown to this viewer. A restricted viewer only sees the rep
/// filter of their own department.
pub fn visible_filters(access: &AccessContext) -> Vec<CategoricalFilter> {
    let restricted = access.is_restricted();
    let own_rep = access.restricted_rep();
    CategoricalFilter::ALL
        .into_iter()
        .filter(|f| match f.rep_kind() {
            Some(rep) => !restricted || own_rep == Some(rep),
            None => true,
        })
        .collect()
}

/// Starting filter state after a load: staff get their own name selected in
/// their department's rep filter.
pub fn default_filter(access: &AccessContext) -> OrderFilter {
    let mut filter = OrderFilter::default();
    if let AccessScope::Own { rep: Some(rep), name } = access.scope() {
        if !name.is_empty() {
            filter.set_selection(CategoricalFilter::for_rep(rep), [name]);
        }
    }
    filter
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

    fn ctx_for(employee: Value, email: &str) -> AccessContext {
        let roster: Vec<Employee> = records(employee).into_iter().map(Employee::new).collect();
        resolve_access(email, &roster, "admin@x.vn")
    }

    fn orders() -> Vec<Record> {
        records(json!([
            {"Nhân viên Sale": "Bình", "Nhân viên Marketing": "Mai", "Khu vực": " Bắc "},
            {"Nhân viên Sale": " An", "Nhân viên Marketing": "Lan", "Khu vực": "Nam"},
            {"Nhân viên Sale": "An", "Khu vực": ""},
            {"Nhân viên Sale": "Chi", "NV Vận đơn": "Tú"}
        ]))
    }

    #[test]
    fn test_unrestricted_options_are_distinct_sorted_trimmed() {
        let admin = resolve_access("admin@x.vn", &[], "admin@x.vn");
        let opts = derive_options(&orders(), &admin);
        assert_eq!(opts.get(CategoricalFilter::SaleRep), ["An", "Bình", "Chi"]);
        assert_eq!(opts.get(CategoricalFilter::Region), ["Bắc", "Nam"]);
        assert!(opts.get(CategoricalFilter::Product).is_empty());
    }

    #[test]
    fn test_restricted_rep_options_intersect_allowed_names() {
        let ctx = ctx_for(
            json!([{"Email": "an@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "Sale"}]),
            "an@x.vn",
        );
        let opts = derive_options(&orders(), &ctx);
        assert_eq!(opts.get(CategoricalFilter::SaleRep), ["An"]);
        // other rep columns are not narrowed
        assert_eq!(opts.get(CategoricalFilter::MarketingRep), ["Lan", "Mai"]);
    }

    #[test]
    fn test_logistics_department_variants() {
        let ctx = ctx_for(
            json!([{"Email": "tu@x.vn", "Họ_và_tên": "Tú", "Vị_trí": "NV", "Bộ_phận": "Vận Hành"}]),
            "tu@x.vn",
        );
        let opts = derive_options(&orders(), &ctx);
        assert_eq!(opts.get(CategoricalFilter::LogisticsRep), ["Tú"]);
        assert_eq!(
            default_filter(&ctx).selection(CategoricalFilter::LogisticsRep),
            vec!["Tú".to_string()]
        );
    }

    #[test]
    fn test_visible_filters_hide_other_departments_for_restricted() {
        let ctx = ctx_for(
            json!([{"Email": "an@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "MKT"}]),
            "an@x.vn",
        );
        let visible = visible_filters(&ctx);
        assert!(visible.contains(&CategoricalFilter::MarketingRep));
        assert!(!visible.contains(&CategoricalFilter::SaleRep));
        assert!(!visible.contains(&CategoricalFilter::LogisticsRep));
        assert!(visible.contains(&CategoricalFilter::Region));

        let admin = resolve_access("admin@x.vn", &[], "admin@x.vn");
        assert_eq!(visible_filters(&admin).len(), CategoricalFilter::ALL.len());
    }

    #[test]
    fn test_default_filter_only_for_staff() {
        let staff = ctx_for(
            json!([{"Email": "an@x.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "CSKH"}]),
            "an@x.vn",
        );
        assert_eq!(
            default_filter(&staff).selection(CategoricalFilter::SaleRep),
            vec!["An".to_string()]
        );

        let leader = ctx_for(
            json!([{"Email": "b@x.vn", "Họ_và_tên": "Bình", "Vị_trí": "Leader", "Bộ_phận": "Sale", "Team": "T"}]),
            "b@x.vn",
        );
        assert_eq!(default_filter(&leader), OrderFilter::default());
    }
}
