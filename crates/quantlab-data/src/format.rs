//! Formatting helpers for the textual report.

/// Format a fraction as a percentage, `N/A` when non-finite.
pub fn percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    format!("{:.*}%", decimals, value * 100.0)
}

/// Format a fixed-point number, `N/A` when non-finite.
pub fn number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    format!("{:.*}", decimals, value)
}
