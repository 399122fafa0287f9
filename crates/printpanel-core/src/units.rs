//! Unit formatting utilities
//!
//! Offsets are always millimetres. Two renderings exist: the fixed
//! two-decimal display text shown next to a control, and the compact number
//! embedded in firmware commands.

/// Unit suffix appended to displayed lengths
pub const MM_SUFFIX: &str = "mm";

/// Decimal places kept for every offset
pub const OFFSET_DECIMALS: usize = 2;

/// Format length value for display
///
/// Always exactly two decimals followed by the unit, e.g. `1.50 mm`.
pub fn format_length(value_mm: f64) -> String {
    format!("{:.prec$} {}", value_mm, MM_SUFFIX, prec = OFFSET_DECIMALS)
}

/// Format a number for a firmware command parameter
///
/// Up to two decimals with trailing zeros trimmed, keeping at least one
/// fractional digit: `1.0`, `-0.25`, `12.5`. No exponent, no separators.
pub fn format_gcode_number(value: f64) -> String {
    let mut text = format!("{:.prec$}", value, prec = OFFSET_DECIMALS);
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// Parse length string to millimetres
///
/// Accepts an optional trailing `mm` so that display text can be fed back
/// in. Rejects empty input and non-finite values.
pub fn parse_length(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix(MM_SUFFIX)
        .map(str::trim_end)
        .unwrap_or(trimmed);

    if number.is_empty() {
        return Err("empty value".to_string());
    }

    let value = number
        .parse::<f64>()
        .map_err(|_| "not a number".to_string())?;

    if value.is_nan() {
        return Err("not a number".to_string());
    }
    if value.is_infinite() {
        return Err("value out of range".to_string());
    }

    Ok(value)
}
