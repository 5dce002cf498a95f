//! Money coercion and display for VNĐ amounts.

use serde_json::Value;

/// Coerce a loosely-typed amount into a number.
///
/// Numbers pass through. Strings keep only their ASCII digits, so both
/// `"1.200.000"` and `"1,200,000"` become `1200000`. Anything else is `0`.
pub fn parse_safe_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse::<f64>().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Inserts `.` every three digits from the right.
fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Display form of an amount: rounded to the nearest 1000, dot-grouped,
/// with a ` ₫` suffix. Display only, never fed back into arithmetic.
///
/// ```
/// use contracts::shared::money::format_currency;
/// assert_eq!(format_currency(1_234_567.0), "1.235.000 ₫");
/// assert_eq!(format_currency(0.0), "0 ₫");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() || amount == 0.0 {
        return "0 ₫".to_string();
    }
    let rounded = (amount / 1000.0).round() * 1000.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{} ₫", sign, group_thousands(rounded.abs() as u64))
}

/// Plain dot-grouped integer without currency suffix (counts, stats cards).
pub fn format_count(n: usize) -> String {
    group_thousands(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_safe_number_separators() {
        assert_eq!(parse_safe_number(Some(&json!("1.200.000"))), 1_200_000.0);
        assert_eq!(parse_safe_number(Some(&json!("1,200,000"))), 1_200_000.0);
        assert_eq!(parse_safe_number(Some(&json!(1200000))), 1_200_000.0);
        assert_eq!(parse_safe_number(Some(&json!("500.000 ₫"))), 500_000.0);
    }

    #[test]
    fn test_parse_safe_number_fallbacks() {
        assert_eq!(parse_safe_number(Some(&json!(""))), 0.0);
        assert_eq!(parse_safe_number(Some(&Value::Null)), 0.0);
        assert_eq!(parse_safe_number(None), 0.0);
        assert_eq!(parse_safe_number(Some(&json!("abc"))), 0.0);
        assert_eq!(parse_safe_number(Some(&json!(true))), 0.0);
    }

    #[test]
    fn test_parse_safe_number_keeps_fractional_numbers() {
        assert_eq!(parse_safe_number(Some(&json!(12.5))), 12.5);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0 ₫");
        assert_eq!(format_currency(1_200_000.0), "1.200.000 ₫");
        assert_eq!(format_currency(1_234_567.0), "1.235.000 ₫");
        assert_eq!(format_currency(499.0), "0 ₫");
        assert_eq!(format_currency(500.0), "1.000 ₫");
        assert_eq!(format_currency(-25_400.0), "-25.000 ₫");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1234), "1.234");
    }
}
