// src/dataset/numbers.rs

/// Parse a value cell, ignoring spaces and thousands separators.
/// Only finite numbers are accepted.
pub fn parse_value(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a year cell such as `"2020"` or `"2020.0"`, truncating fractions.
pub fn parse_year(raw: &str) -> Option<i32> {
    let v = raw.trim().parse::<f64>().ok()?;
    if !v.is_finite() || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v.trunc() as i32)
}
