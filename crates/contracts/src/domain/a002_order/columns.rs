//! Orders table columns: identity, header, cell rendering, visibility and
//! export of the visible subset.

use serde::{Deserialize, Serialize};

use super::fields::OrderField;
use crate::shared::dates::format_date;
use crate::shared::export::TableExport;
use crate::shared::field::LogicalField;
use crate::shared::money::{format_currency, parse_safe_number};
use crate::shared::record::Record;

/// Local-storage key of the visible column ids.
pub const COLUMNS_STORAGE_KEY: &str = "order-table-columns";
/// Column layout of the order editing screen, stored separately.
pub const EDIT_COLUMNS_STORAGE_KEY: &str = "edit-order-table-columns";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderColumn {
    Stt,
    MaDon,
    Tracking,
    NgayLenDon,
    Name,
    Sale,
    Mkt,
    VanDon,
    Check,
    GiaoHang,
    Dvvc,
    ThuTien,
    MatHang,
    KhuVuc,
    TongTien,
    PhiShip,
    DoiSoat,
}

impl OrderColumn {
    pub const ALL: [OrderColumn; 17] = [
        OrderColumn::Stt,
        OrderColumn::MaDon,
        OrderColumn::Tracking,
        OrderColumn::NgayLenDon,
        OrderColumn::Name,
        OrderColumn::Sale,
        OrderColumn::Mkt,
        OrderColumn::VanDon,
        OrderColumn::Check,
        OrderColumn::GiaoHang,
        OrderColumn::Dvvc,
        OrderColumn::ThuTien,
        OrderColumn::MatHang,
        OrderColumn::KhuVuc,
        OrderColumn::TongTien,
        OrderColumn::PhiShip,
        OrderColumn::DoiSoat,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            OrderColumn::Stt => "stt",
            OrderColumn::MaDon => "ma_don",
            OrderColumn::Tracking => "tracking",
            OrderColumn::NgayLenDon => "ngay_len_don",
            OrderColumn::Name => "name",
            OrderColumn::Sale => "sale",
            OrderColumn::Mkt => "mkt",
            OrderColumn::VanDon => "van_don",
            OrderColumn::Check => "check",
            OrderColumn::GiaoHang => "giao_hang",
            OrderColumn::Dvvc => "dvvc",
            OrderColumn::ThuTien => "thu_tien",
            OrderColumn::MatHang => "mat_hang",
            OrderColumn::KhuVuc => "khu_vuc",
            OrderColumn::TongTien => "tong_tien",
            OrderColumn::PhiShip => "phi_ship",
            OrderColumn::DoiSoat => "doi_soat",
        }
    }

    pub fn from_id(id: &str) -> Option<OrderColumn> {
        OrderColumn::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderColumn::Stt => "STT",
            OrderColumn::MaDon => "Mã đơn hàng",
            OrderColumn::Tracking => "Mã Tracking",
            OrderColumn::NgayLenDon => "Ngày lên đơn",
            OrderColumn::Name => "Name*",
            OrderColumn::Sale => "Nhân viên Sale",
            OrderColumn::Mkt => "Nhân viên Marketing",
            OrderColumn::VanDon => "NV Vận đơn",
            OrderColumn::Check => "Kết quả Check",
            OrderColumn::GiaoHang => "Trạng thái giao hàng NB",
            OrderColumn::Dvvc => "Đơn vị vận chuyển",
            OrderColumn::ThuTien => "Trạng thái thu tiền",
            OrderColumn::MatHang => "Mặt hàng",
            OrderColumn::KhuVuc => "Khu vực",
            OrderColumn::TongTien => "Tổng tiền VNĐ",
            OrderColumn::PhiShip => "Phí ship",
            OrderColumn::DoiSoat => "Tiền Việt đã đối soát",
        }
    }

    /// Backing field; `None` for the row number.
    pub fn field(&self) -> Option<OrderField> {
        Some(match self {
            OrderColumn::Stt => return None,
            OrderColumn::MaDon => OrderField::Code,
            OrderColumn::Tracking => OrderField::Tracking,
            OrderColumn::NgayLenDon => OrderField::OrderDate,
            OrderColumn::Name => OrderField::CustomerName,
            OrderColumn::Sale => OrderField::SaleRep,
            OrderColumn::Mkt => OrderField::MarketingRep,
            OrderColumn::VanDon => OrderField::LogisticsRep,
            OrderColumn::Check => OrderField::CheckResult,
            OrderColumn::GiaoHang => OrderField::DeliveryStatus,
            OrderColumn::Dvvc => OrderField::Carrier,
            OrderColumn::ThuTien => OrderField::PaymentStatus,
            OrderColumn::MatHang => OrderField::Product,
            OrderColumn::KhuVuc => OrderField::Region,
            OrderColumn::TongTien => OrderField::Amount,
            OrderColumn::PhiShip => OrderField::ShippingFee,
            OrderColumn::DoiSoat => OrderField::Reconciled,
        })
    }

    pub fn is_money(&self) -> bool {
        matches!(self, OrderColumn::TongTien | OrderColumn::PhiShip | OrderColumn::DoiSoat)
    }

    /// Display text of this column for the row at 1-based position `row_no`.
    pub fn cell(&self, record: &Record, row_no: usize) -> String {
        match self.field() {
            None => row_no.to_string(),
            Some(OrderField::OrderDate) => format_date(OrderField::OrderDate.value(record)),
            Some(field) if self.is_money() => format_currency(parse_safe_number(field.value(record))),
            Some(field) => field.text(record),
        }
    }

    /// Raw value for export: numbers stay unformatted.
    fn export_cell(&self, record: &Record, row_no: usize) -> String {
        match self.field() {
            Some(field) if self.is_money() => parse_safe_number(field.value(record)).to_string(),
            _ => self.cell(record, row_no),
        }
    }
}

/// Colour class of the check-result badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckBadge {
    Ok,
    Cancelled,
    Other,
}

impl CheckBadge {
    /// `None` for an empty result (no badge).
    pub fn classify(result: &str) -> Option<CheckBadge> {
        let lower = result.to_lowercase();
        if lower.trim().is_empty() {
            None
        } else if lower.contains("ok") {
            Some(CheckBadge::Ok)
        } else if lower.contains("hủy") || lower.contains("huy") {
            Some(CheckBadge::Cancelled)
        } else {
            Some(CheckBadge::Other)
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CheckBadge::Ok => "badge badge--ok",
            CheckBadge::Cancelled => "badge badge--cancelled",
            CheckBadge::Other => "badge badge--pending",
        }
    }
}

/// Ordered set of visible columns. Unknown ids from storage are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility(Vec<OrderColumn>);

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self(OrderColumn::ALL.to_vec())
    }
}

impl ColumnVisibility {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let ids: Vec<String> = serde_json::from_str(json)?;
        let visible: Vec<OrderColumn> = ids.iter().filter_map(|id| OrderColumn::from_id(id)).collect();
        Ok(Self::from_columns(&visible))
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let ids: Vec<&str> = self.0.iter().map(OrderColumn::id).collect();
        Ok(serde_json::to_string(&ids)?)
    }

    /// Keep table order regardless of the order columns were toggled in.
    fn from_columns(visible: &[OrderColumn]) -> Self {
        Self(
            OrderColumn::ALL
                .into_iter()
                .filter(|c| visible.contains(c))
                .collect(),
        )
    }

    pub fn is_visible(&self, column: OrderColumn) -> bool {
        self.0.contains(&column)
    }

    pub fn toggle(&mut self, column: OrderColumn) {
        let mut visible = self.0.clone();
        if let Some(pos) = visible.iter().position(|c| *c == column) {
            visible.remove(pos);
        } else {
            visible.push(column);
        }
        *self = Self::from_columns(&visible);
    }

    pub fn show_all(&mut self) {
        *self = Self::default();
    }

    pub fn columns(&self) -> &[OrderColumn] {
        &self.0
    }
}

/// Export the filtered rows restricted to the visible columns.
pub fn orders_export(records: &[&Record], visibility: &ColumnVisibility) -> TableExport {
    let columns = visibility.columns();
    let mut table = TableExport::new(columns.iter().map(|c| c.label().to_string()).collect());
    for (idx, record) in records.iter().enumerate() {
        table.push_row(columns.iter().map(|c| c.export_cell(record, idx + 1)).collect());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_round_trip_through_from_id() {
        for column in OrderColumn::ALL {
            assert_eq!(OrderColumn::from_id(column.id()), Some(column));
        }
        assert_eq!(OrderColumn::from_id("actions"), None);
    }

    #[test]
    fn test_cells() {
        let row = json!({
            "Mã đơn hàng": "A1",
            "Ngày lên đơn": "2024-03-15T09:00:00",
            "Tổng tiền VNĐ": "1.234.567",
            "Phí ship": null
        });
        let r = row.as_object().unwrap();
        assert_eq!(OrderColumn::Stt.cell(r, 7), "7");
        assert_eq!(OrderColumn::MaDon.cell(r, 1), "A1");
        assert_eq!(OrderColumn::NgayLenDon.cell(r, 1), "15/03/2024");
        assert_eq!(OrderColumn::TongTien.cell(r, 1), "1.235.000 ₫");
        assert_eq!(OrderColumn::PhiShip.cell(r, 1), "0 ₫");
        assert_eq!(OrderColumn::Tracking.cell(r, 1), "");
    }

    #[test]
    fn test_check_badge() {
        assert_eq!(CheckBadge::classify("OK"), Some(CheckBadge::Ok));
        assert_eq!(CheckBadge::classify("Đã Hủy"), Some(CheckBadge::Cancelled));
        assert_eq!(CheckBadge::classify("huy don"), Some(CheckBadge::Cancelled));
        assert_eq!(CheckBadge::classify("Chờ xác nhận"), Some(CheckBadge::Other));
        assert_eq!(CheckBadge::classify(""), None);
    }

    #[test]
    fn test_visibility_toggle_keeps_table_order() {
        let mut vis = ColumnVisibility::default();
        vis.toggle(OrderColumn::Tracking);
        assert!(!vis.is_visible(OrderColumn::Tracking));
        vis.toggle(OrderColumn::Tracking);
        assert_eq!(vis, ColumnVisibility::default());
    }

    #[test]
    fn test_visibility_json_ignores_unknown_ids() {
        let vis = ColumnVisibility::from_json(r#"["tong_tien","ma_don","actions"]"#).unwrap();
        assert_eq!(vis.columns(), &[OrderColumn::MaDon, OrderColumn::TongTien]);
        assert_eq!(vis.to_json().unwrap(), r#"["ma_don","tong_tien"]"#);
        assert!(ColumnVisibility::from_json("{").is_err());
    }

    #[test]
    fn test_export_visible_columns_with_raw_numbers() {
        let rows = [
            json!({"Mã đơn hàng": "A1", "Tổng tiền VNĐ": "1.200.000"}),
            json!({"Mã đơn hàng": "B2", "Tổng tiền VNĐ": 500000}),
        ];
        let records: Vec<&Record> = rows.iter().map(|v| v.as_object().unwrap()).collect();
        let vis = ColumnVisibility::from_json(r#"["stt","ma_don","tong_tien"]"#).unwrap();
        let table = orders_export(&records, &vis);
        assert_eq!(table.headers, vec!["STT", "Mã đơn hàng", "Tổng tiền VNĐ"]);
        assert_eq!(table.rows[0], vec!["1", "A1", "1200000"]);
        assert_eq!(table.rows[1], vec!["2", "B2", "500000"]);
    }
}
