//! Order dates arrive as free-form strings (ISO, `yyyy/mm/dd`, `dd/mm/yyyy`,
//! with or without time) or as epoch milliseconds. Everything is treated as
//! naive wall-clock time.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a text date/time. `None` when no known layout matches.
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a record value as a date/time. Numbers are epoch milliseconds.
pub fn parse_record_date(value: Option<&Value>) -> Option<NaiveDateTime> {
    match value? {
        Value::String(s) => parse_date_text(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

/// `dd/mm/yyyy` for table cells; unparseable input is shown as-is.
pub fn format_date(value: Option<&Value>) -> String {
    match parse_record_date(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value
            .map(super::record::value_to_text)
            .unwrap_or_default(),
    }
}

/// Excel serial day number (days since 1899-12-30) to a calendar date.
/// `0`, negative and non-finite serials have no date.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial <= 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    let days = (serial - 25569.0).floor() as i64;
    epoch.checked_add_signed(Duration::days(days))
}

/// Inclusive calendar-day range. A missing bound is open.
///
/// A value passes when it falls within `[start 00:00:00.000, end 23:59:59.999]`.
/// When either bound is set, values without a parseable date are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, value: Option<NaiveDateTime>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(dt) = value else {
            return false;
        };
        let day = dt.date();
        if self.start.is_some_and(|start| day < start) {
            return false;
        }
        if self.end.is_some_and(|end| day > end) {
            return false;
        }
        true
    }
}
