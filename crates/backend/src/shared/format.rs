/// Форматирует число с разделителями тысяч (точками)
pub fn format_number(n: usize) -> String {
    contracts::shared::money::format_count(n)
}

/// Response size for the request log: bytes below 1 KB, then KB/MB.
pub fn format_size(bytes: usize) -> String {
    match bytes {
        0..=1023 => format!("{} B", format_number(bytes)),
        1024..=1_048_575 => format!("{} KB", format_number(bytes / 1024)),
        _ => format!("{} MB", format_number(bytes / 1_048_576)),
    }
}
