use serde::{Deserialize, Serialize};

use crate::shared::field::LogicalField;

/// Logical order fields and their literal key spellings, highest priority
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderField {
    Code,
    Tracking,
    OrderDate,
    CustomerName,
    Phone,
    Address,
    City,
    State,
    Zipcode,
    SaleRep,
    MarketingRep,
    LogisticsRep,
    CheckResult,
    DeliveryStatus,
    Carrier,
    PaymentStatus,
    Product,
    Region,
    Amount,
    ShippingFee,
    Reconciled,
    Note,
}

impl LogicalField for OrderField {
    fn keys(&self) -> &'static [&'static str] {
        match self {
            OrderField::Code => &["Mã_đơn_hàng", "Mã đơn hàng"],
            OrderField::Tracking => &["Mã_Tracking", "Mã Tracking"],
            OrderField::OrderDate => &["Ngày_lên_đơn", "Ngày lên đơn", "Thời gian lên đơn"],
            OrderField::CustomerName => &["Name", "Name*", "Tên lên đơn"],
            OrderField::Phone => &["Phone", "Số điện thoại"],
            OrderField::Address => &["Add", "Địa chỉ"],
            OrderField::City => &["City", "Thành phố"],
            OrderField::State => &["State", "Tỉnh"],
            OrderField::Zipcode => &["Zipcode", "Mã bưu điện"],
            OrderField::SaleRep => &["Nhân_viên_Sale", "Nhân viên Sale"],
            OrderField::MarketingRep => &["Nhân_viên_Marketing", "Nhân viên Marketing"],
            OrderField::LogisticsRep => &["NV_Vận_đơn", "NV Vận đơn"],
            OrderField::CheckResult => &["Kết_quả_Check", "Kết quả Check"],
            OrderField::DeliveryStatus => &[
                "Trạng_thái_giao_hàng",
                "Trạng thái giao hàng NB",
                "Trạng thái giao hàng",
            ],
            OrderField::Carrier => &["Đơn_vị_vận_chuyển", "Đơn vị vận chuyển"],
            OrderField::PaymentStatus => &["Trạng_thái_thu_tiền", "Trạng thái thu tiền"],
            OrderField::Product => &["Mặt_hàng", "Mặt hàng"],
            OrderField::Region => &["Khu_vực", "Khu vực"],
            OrderField::Amount => &[
                "Tổng_tiền_VNĐ",
                "Tổng tiền VNĐ",
                "Tổng Tiền VNĐ",
                "Tổng_tiền_VND",
                "Tổng tiền",
            ],
            OrderField::ShippingFee => &["Phí_ship", "Phí ship"],
            OrderField::Reconciled => &["Tiền_Việt_đã_đối_soát", "Tiền Việt đã đối soát"],
            OrderField::Note => &["Ghi_chú", "Ghi chú"],
        }
    }
}

/// Which rep column a department is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepKind {
    Sale,
    Marketing,
    Logistics,
}

impl RepKind {
    pub fn field(&self) -> OrderField {
        match self {
            RepKind::Sale => OrderField::SaleRep,
            RepKind::Marketing => OrderField::MarketingRep,
            RepKind::Logistics => OrderField::LogisticsRep,
        }
    }

    /// `Sale` → sale rep, `MKT` → marketing rep, `Vận Đơn` / `Vận Hành` →
    /// logistics rep. Exact match on the (normalized) department.
    pub fn for_department(department: &str) -> Option<RepKind> {
        match department {
            "Sale" => Some(RepKind::Sale),
            "MKT" => Some(RepKind::Marketing),
            "Vận Đơn" | "Vận Hành" => Some(RepKind::Logistics),
            _ => None,
        }
    }
}
