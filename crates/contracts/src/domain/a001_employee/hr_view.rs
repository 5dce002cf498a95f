//! HR list screen: search, single-select filters, headline stats, export.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::EmployeeField;
use super::roster::Employee;
use crate::shared::dates::{excel_serial_to_date, parse_date_text};
use crate::shared::export::TableExport;
use crate::shared::field::LogicalField;

/// Status values offered by the edit form.
pub const STATUS_OPTIONS: [&str; 3] = ["THỬ VIỆC", "CHÍNH THỨC", "NGHỈ VIỆC"];

/// Placeholder shown for missing values on the HR screens.
pub const MISSING: &str = "---";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Matched against name and email (case-insensitive) and phone (as typed).
    pub search: String,
    /// `None` means "all".
    pub department: Option<String>,
    pub branch: Option<String>,
    pub status: Option<String>,
}

impl EmployeeFilter {
    pub fn matches(&self, employee: &Employee) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = employee.full_name().to_lowercase().contains(&term)
            || employee.email().contains(&term)
            || employee.phone().contains(self.search.as_str());

        matches_search
            && matches_choice(&self.department, &employee.department())
            && matches_choice(&self.branch, &employee.branch())
            && matches_choice(&self.status, &employee.status())
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

fn matches_choice(choice: &Option<String>, value: &str) -> bool {
    choice.as_deref().map_or(true, |wanted| wanted == value)
}

/// Distinct non-empty values of a field, sorted.
pub fn distinct_values(employees: &[Employee], field: EmployeeField) -> Vec<String> {
    employees
        .iter()
        .map(|e| e.get(field))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub total: usize,
    pub active: usize,
    pub probation: usize,
    pub filtered: usize,
}

impl EmployeeStats {
    pub fn compute(all: &[Employee], filtered: usize) -> Self {
        let mut stats = EmployeeStats {
            total: all.len(),
            filtered,
            ..Default::default()
        };
        for employee in all {
            let status = employee.status().to_lowercase();
            if is_active_status(&status) {
                stats.active += 1;
            }
            if status.contains("thử việc") {
                stats.probation += 1;
            }
        }
        stats
    }
}

/// Blank status counts as working.
fn is_active_status(status_lower: &str) -> bool {
    status_lower.is_empty()
        || status_lower.contains("chính thức")
        || status_lower.contains("đang làm việc")
}

/// Start date stored as an Excel serial (sometimes as text), shown as
/// `dd/mm/yyyy`; [`MISSING`] when absent or unparseable.
pub fn start_date_display(employee: &Employee) -> String {
    let date = match EmployeeField::StartDate.value(&employee.record) {
        Some(Value::Number(n)) => n.as_f64().and_then(excel_serial_to_date),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(serial) => excel_serial_to_date(serial),
            Err(_) => parse_date_text(s).map(|dt| dt.date()),
        },
        _ => None,
    };
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

const EXPORT_FIELDS: [EmployeeField; 11] = [
    EmployeeField::FullName,
    EmployeeField::Email,
    EmployeeField::Phone,
    EmployeeField::Gender,
    EmployeeField::Title,
    EmployeeField::Department,
    EmployeeField::Branch,
    EmployeeField::StartDate,
    EmployeeField::Hometown,
    EmployeeField::MaritalStatus,
    EmployeeField::Status,
];

/// Export of the filtered list, numbered from 1.
pub fn hr_export(employees: &[&Employee]) -> TableExport {
    let mut headers = vec!["STT".to_string()];
    headers.extend(EXPORT_FIELDS.iter().map(|f| f.label().to_string()));
    let mut table = TableExport::new(headers);

    for (idx, employee) in employees.iter().enumerate() {
        let mut row = vec![(idx + 1).to_string()];
        for field in EXPORT_FIELDS {
            let cell = match field {
                EmployeeField::StartDate => start_date_display(employee),
                other => employee.get(other),
            };
            row.push(cell);
        }
        table.push_row(row);
    }
    table
}

/// `Xin chào <name> - Đang xem dữ liệu nhân sự`
pub fn hr_greeting(viewer_name: Option<&str>) -> String {
    let name = viewer_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Người dùng");
    format!("Xin chào {} - Đang xem dữ liệu nhân sự", name)
}
