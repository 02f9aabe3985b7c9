//! Display rounding for computed tolerances and limits

/// Default number of decimal places shown for tolerances and limits
pub const DEFAULT_DECIMALS: u32 = 3;

/// Round to `decimals` places, dropping floating-point artifacts
///
/// `2.9000000000000004` becomes `2.9`. Negative zero is normalized to zero.
pub fn round_display(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a value rounded to `decimals` places in its shortest form
///
/// Trailing zeros are not padded: `10.2`, `4000`, `0.05`.
pub fn format_value(value: f64, decimals: u32) -> String {
    round_display(value, decimals).to_string()
}
