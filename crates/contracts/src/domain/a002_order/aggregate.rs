use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::fields::OrderField;
use crate::shared::field::LogicalField;
use crate::shared::money::parse_safe_number;
use crate::shared::record::Record;

/// Headline numbers of the filtered order view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Distinct order codes.
    pub count: usize,
    pub total_amount: f64,
    pub total_ship: f64,
    pub total_reconciled: f64,
}

/// Sum over distinct order codes. A sheet may repeat an order on several
/// lines; only the first line of each code counts and lines without a code
/// are ignored.
pub fn aggregate(records: &[&Record]) -> OrderTotals {
    let mut seen = HashSet::new();
    let mut totals = OrderTotals::default();

    for record in records {
        let code = OrderField::Code.trimmed(record);
        if code.is_empty() || !seen.insert(code) {
            continue;
        }
        totals.count += 1;
        totals.total_amount += parse_safe_number(OrderField::Amount.value(record));
        totals.total_ship += parse_safe_number(OrderField::ShippingFee.value(record));
        totals.total_reconciled += parse_safe_number(OrderField::Reconciled.value(record));
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::filter::{filter_orders, OrderFilter};
    use crate::domain::a001_employee::roster::Employee;
    use crate::shared::money::format_currency;
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

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let data = records(json!([
            {"Mã đơn hàng": "A1", "Tổng tiền VNĐ": "100.000"},
            {"Mã_đơn_hàng": " A1 ", "Tổng tiền VNĐ": 999999},
            {"Mã đơn hàng": "B2", "Tổng_tiền_VNĐ": 50000, "Phí ship": "30,000"},
            {"Tổng tiền VNĐ": 77777}
        ]));
        let refs: Vec<&Record> = data.iter().collect();
        let totals = aggregate(&refs);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.total_amount, 150_000.0);
        assert_eq!(totals.total_ship, 30_000.0);
        assert_eq!(totals.total_reconciled, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]), OrderTotals::default());
    }

    #[test]
    fn test_amount_key_fallbacks() {
        let data = records(json!([
            {"Mã đơn hàng": "1", "Tổng Tiền VNĐ": 10},
            {"Mã đơn hàng": "2", "Tổng_tiền_VND": 20},
            {"Mã đơn hàng": "3", "Tổng tiền": 30},
            {"Mã đơn hàng": "4", "Tiền Việt đã đối soát": "1.000"}
        ]));
        let refs: Vec<&Record> = data.iter().collect();
        let totals = aggregate(&refs);
        assert_eq!(totals.total_amount, 60.0);
        assert_eq!(totals.total_reconciled, 1000.0);
    }

    #[test]
    fn test_staff_scenario_end_to_end() {
        let roster: Vec<Employee> = records(json!([
            {"Email": "an@lumi.vn", "Họ_và_tên": "An", "Vị_trí": "NV", "Bộ_phận": "Sale"}
        ]))
        .into_iter()
        .map(Employee::new)
        .collect();
        let orders = records(json!([
            {"Mã đơn hàng": "A1", "Nhân viên Sale": "An", "Tổng tiền VNĐ": "1.200.000"},
            {"Mã đơn hàng": "A1", "Nhân viên Sale": "An ", "Tổng tiền VNĐ": "1.200.000"},
            {"Mã đơn hàng": "B2", "Nhân viên Sale": "Bình", "Tổng tiền VNĐ": "500.000"}
        ]));

        let ctx = resolve_access("an@lumi.vn", &roster, "admin@lumi.vn");
        let visible = filter_orders(&orders, &ctx, &OrderFilter::default());
        assert_eq!(visible.len(), 2);

        let totals = aggregate(&visible);
        assert_eq!(totals.count, 1);
        assert_eq!(format_currency(totals.total_amount), "1.200.000 ₫");
    }
}
