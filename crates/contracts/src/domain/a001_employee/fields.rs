use crate::shared::field::LogicalField;

/// Logical employee fields.
///
/// The roster sheet uses display-style keys (`Họ_và_tên`, `Bộ phận`), the HR
/// collection uses snake keys (`ho_va_ten`, `bo_phan`); both are covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    FullName,
    Email,
    Title,
    Department,
    Team,
    SaleMarTeam,
    Branch,
    Status,
    Phone,
    Gender,
    Hometown,
    MaritalStatus,
    IdNumber,
    IdIssueDate,
    IdIssuePlace,
    StartDate,
    AvatarUrl,
}

impl EmployeeField {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::FullName => "Họ và tên",
            EmployeeField::Email => "Email",
            EmployeeField::Title => "Vị trí",
            EmployeeField::Department => "Bộ phận",
            EmployeeField::Team => "Team",
            EmployeeField::SaleMarTeam => "Team Sale/MKT",
            EmployeeField::Branch => "Chi nhánh",
            EmployeeField::Status => "Trạng thái",
            EmployeeField::Phone => "Số điện thoại",
            EmployeeField::Gender => "Giới tính",
            EmployeeField::Hometown => "Quê quán",
            EmployeeField::MaritalStatus => "Tình trạng hôn nhân",
            EmployeeField::IdNumber => "Số CCCD",
            EmployeeField::IdIssueDate => "Ngày cấp",
            EmployeeField::IdIssuePlace => "Nơi cấp",
            EmployeeField::StartDate => "Ngày vào làm",
            EmployeeField::AvatarUrl => "URL Ảnh đại diện",
        }
    }

    /// Key written back by the edit form (HR collection spelling).
    pub fn storage_key(&self) -> &'static str {
        match self {
            EmployeeField::FullName => "ho_va_ten",
            EmployeeField::Email => "email",
            EmployeeField::Title => "vi_tri",
            EmployeeField::Department => "bo_phan",
            EmployeeField::Team => "Team",
            EmployeeField::SaleMarTeam => "Team_Sale_mar",
            EmployeeField::Branch => "chi_nhanh",
            EmployeeField::Status => "trang_thai",
            EmployeeField::Phone => "sđt",
            EmployeeField::Gender => "gioi_tinh",
            EmployeeField::Hometown => "que_quan",
            EmployeeField::MaritalStatus => "tinh_trang_hon_nhan",
            EmployeeField::IdNumber => "cccd",
            EmployeeField::IdIssueDate => "ngay_cap",
            EmployeeField::IdIssuePlace => "noi_cap",
            EmployeeField::StartDate => "ngay_vao_lam",
            EmployeeField::AvatarUrl => "avatarUrl",
        }
    }
}

impl LogicalField for EmployeeField {
    fn keys(&self) -> &'static [&'static str] {
        match self {
            EmployeeField::FullName => &["Họ_và_tên", "Họ Và Tên", "Họ và tên", "Tên", "Name", "ho_va_ten"],
            EmployeeField::Email => &["Email", "email"],
            EmployeeField::Title => &["Vị_trí", "Vị trí", "Vi_tri", "Position", "vi_tri"],
            EmployeeField::Department => &["Bộ_phận", "Bộ phận", "Bo_phan", "bo_phan"],
            EmployeeField::Team => &["Team"],
            EmployeeField::SaleMarTeam => &["Team_Sale_mar"],
            EmployeeField::Branch => &["chi_nhánh", "chi nhánh", "Chi_nhanh", "chi_nhanh"],
            EmployeeField::Status => &["trang_thai", "Trạng_thái", "Trạng thái"],
            EmployeeField::Phone => &["sđt", "SĐT", "Số_điện_thoại", "Số điện thoại"],
            EmployeeField::Gender => &["gioi_tinh", "Giới tính"],
            EmployeeField::Hometown => &["que_quan", "Quê quán"],
            EmployeeField::MaritalStatus => &["tinh_trang_hon_nhan"],
            EmployeeField::IdNumber => &["cccd", "CCCD"],
            EmployeeField::IdIssueDate => &["ngay_cap"],
            EmployeeField::IdIssuePlace => &["noi_cap"],
            EmployeeField::StartDate => &["ngay_vao_lam"],
            EmployeeField::AvatarUrl => &["avatarUrl"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roster_and_collection_spellings() {
        let roster = json!({"Họ_và_tên": "Trần B", "Bộ phận": "Sale"});
        let collection = json!({"ho_va_ten": "Lê C", "bo_phan": "MKT"});

        let r = roster.as_object().unwrap();
        let c = collection.as_object().unwrap();
        assert_eq!(EmployeeField::FullName.text(r), "Trần B");
        assert_eq!(EmployeeField::Department.text(r), "Sale");
        assert_eq!(EmployeeField::FullName.text(c), "Lê C");
        assert_eq!(EmployeeField::Department.text(c), "MKT");
    }

    #[test]
    fn test_storage_key_is_a_candidate() {
        for field in [
            EmployeeField::FullName,
            EmployeeField::Phone,
            EmployeeField::Status,
            EmployeeField::StartDate,
        ] {
            assert!(field.keys().contains(&field.storage_key()));
        }
    }
}
