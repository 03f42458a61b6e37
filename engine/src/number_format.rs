//! FILENAME: engine/src/number_format.rs
//! PURPOSE: Number formatting for displaying calculation results.
//! CONTEXT: This module handles the conversion of a raw numeric result to
//! the display string shown in the calculator and recorded in history.

/// Format a calculation result for display.
///
/// Integer results render as plain integers. Non-integer results render
/// fixed to 8 decimal places with trailing zeros (and a trailing decimal
/// point) stripped.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well; the display never shows a signed zero.
        return "0".to_string();
    }

    // For integers, don't show decimal point
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    // For decimals, show up to 8 decimal places but trim trailing zeros
    let formatted = format!("{:.8}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
