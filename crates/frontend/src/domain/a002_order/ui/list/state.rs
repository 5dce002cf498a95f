use chrono::NaiveDate;
use contracts::domain::a002_order::columns::{
    ColumnVisibility, COLUMNS_STORAGE_KEY, EDIT_COLUMNS_STORAGE_KEY,
};
use contracts::domain::a002_order::filter::filter_orders;
use contracts::domain::a002_order::{aggregate, OrderFilter, OrderTotals};
use contracts::shared::record::Record;
use contracts::system::auth::scope_filter::apply_access_filter;
use contracts::system::auth::{AccessContext, SessionUser};
use contracts::system::config::AppConfig;

use crate::shared::firebase::fetch_collection;
use crate::shared::storage;
use crate::system::auth::api::load_access;

/// Orders list flavour: plain listing, or the editing screen with a link
/// to each order and its own column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderListMode {
    View,
    Edit,
}

impl OrderListMode {
    pub fn title(&self) -> &'static str {
        match self {
            OrderListMode::View => "Danh sách đơn hàng",
            OrderListMode::Edit => "Chỉnh sửa đơn hàng",
        }
    }

    pub fn columns_storage_key(&self) -> &'static str {
        match self {
            OrderListMode::View => COLUMNS_STORAGE_KEY,
            OrderListMode::Edit => EDIT_COLUMNS_STORAGE_KEY,
        }
    }
}

/// One successful load: all orders plus the viewer's access context.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersData {
    pub records: Vec<Record>,
    pub access: AccessContext,
}

/// Filtered rows and their totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersView {
    pub rows: Vec<Record>,
    pub totals: OrderTotals,
    /// Rows the viewer may see before the user's own filters.
    pub scoped_total: usize,
}

impl OrdersView {
    pub fn compute(data: &OrdersData, filter: &OrderFilter) -> Self {
        let rows = filter_orders(&data.records, &data.access, filter);
        let totals = aggregate(&rows);
        Self {
            scoped_total: apply_access_filter(&data.records, &data.access).len(),
            rows: rows.into_iter().cloned().collect(),
            totals,
        }
    }
}

/// Roster first (access), then the orders.
pub async fn load_orders(config: &AppConfig, user: &SessionUser) -> Result<OrdersData, String> {
    let access = load_access(config, user).await?;
    let records = fetch_collection(&config.orders_url, config.fetch).await?;
    Ok(OrdersData { records, access })
}

/// Value of an `<input type="date">`; empty clears the bound.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn load_columns(mode: OrderListMode) -> ColumnVisibility {
    storage::get_item(mode.columns_storage_key())
        .and_then(|json| ColumnVisibility::from_json(&json).ok())
        .unwrap_or_default()
}

pub fn save_columns(mode: OrderListMode, columns: &ColumnVisibility) {
    match columns.to_json() {
        Ok(json) => storage::set_item(mode.columns_storage_key(), &json),
        Err(e) => log::error!("Cannot serialize column settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_order::CategoricalFilter;
    use contracts::domain::a001_employee::Employee;
    use contracts::system::auth::resolve_access;
    use serde_json::json;

    fn records() -> Vec<Record> {
        json!([
            {"Mã đơn hàng": "A1", "Nhân viên Sale": "An", "Tổng tiền VNĐ": "500.000"},
            {"Mã đơn hàng": "A1", "Nhân viên Sale": "An", "Tổng tiền VNĐ": "500.000"},
            {"Mã đơn hàng": "B2", "Nhân viên Sale": "Bình", "Tổng tiền VNĐ": 700000}
        ])
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
    }

    #[test]
    fn test_view_for_staff_counts_own_orders_only() {
        let roster = vec![Employee::new(
            json!({"Họ và tên": "An", "email": "an@lumi.vn", "Vị trí": "NV", "Bộ phận": "Sale"})
                .as_object()
                .cloned()
                .unwrap(),
        )];
        let data = OrdersData {
            records: records(),
            access: resolve_access("an@lumi.vn", &roster, "boss@lumi.vn"),
        };
        let view = OrdersView::compute(&data, &OrderFilter::default());
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.scoped_total, 2);
        assert_eq!(view.totals.count, 1);
        assert_eq!(view.totals.total_amount, 500000.0);
    }

    #[test]
    fn test_view_for_admin_with_rep_selection() {
        let data = OrdersData {
            records: records(),
            access: AccessContext::unrestricted("Admin"),
        };
        let mut filter = OrderFilter::default();
        filter.toggle(CategoricalFilter::SaleRep, "Bình");
        let view = OrdersView::compute(&data, &filter);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.scoped_total, 3);
        assert_eq!(view.totals.total_amount, 700000.0);
    }

    #[test]
    fn test_date_input_round_trip() {
        let date = parse_date_input("2024-03-05");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(format_date_input(date), "2024-03-05");
        assert_eq!(parse_date_input(""), None);
        assert_eq!(format_date_input(None), "");
    }

    #[test]
    fn test_modes_keep_separate_column_layouts() {
        assert_ne!(
            OrderListMode::View.columns_storage_key(),
            OrderListMode::Edit.columns_storage_key()
        );
    }
}
