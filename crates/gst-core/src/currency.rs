//! # Currency Formatting
//!
//! Rupee display formatting. This is the ONLY place amounts are rounded:
//! the calculator hands over full-precision f64 values and formatting cuts
//! them to two decimals.
//!
//! ## Format
//! ```text
//! 1234567.891  →  ₹1,234,567.89
//! 180.0        →  ₹180.00
//! 0.0          →  ₹0          (exact zero: bare, no decimals)
//! ```

/// Formats an amount for display with the Rupee sign, thousands separators,
/// and two decimal places.
///
/// Exact zero renders as a bare `₹0`; everything else gets two decimals,
/// including amounts that round to 0.00.
///
/// ## Example
/// ```rust
/// use gst_core::currency::format_currency;
///
/// assert_eq!(format_currency(50000.0), "₹50,000.00");
/// assert_eq!(format_currency(0.0), "₹0");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount == 0.0 {
        return "₹0".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());

    // "{:.2}" always yields exactly one decimal point
    let (int_part, frac_part) = fixed
        .split_once('.')
        .expect("fixed-point format always contains a decimal point");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}₹{grouped}.{frac_part}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_bare() {
        assert_eq!(format_currency(0.0), "₹0");
    }

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_currency(180.0), "₹180.00");
        assert_eq!(format_currency(5.5), "₹5.50");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_currency(1000.0), "₹1,000.00");
        assert_eq!(format_currency(50000.0), "₹50,000.00");
        assert_eq!(format_currency(1234567.891), "₹1,234,567.89");
        assert_eq!(format_currency(10000000.0), "₹10,000,000.00");
    }

    #[test]
    fn test_no_separator_below_thousand() {
        assert_eq!(format_currency(999.99), "₹999.99");
        assert_eq!(format_currency(1.0), "₹1.00");
    }

    #[test]
    fn test_rounding_happens_here() {
        // The calculator's full-precision 179.9982 becomes 180.00 on display
        assert_eq!(format_currency(179.9982), "₹180.00");
        assert_eq!(format_currency(179.994), "₹179.99");
    }

    #[test]
    fn test_near_zero_is_not_bare() {
        // Only exact zero gets the bare form
        assert_eq!(format_currency(0.004), "₹0.00");
    }

    #[test]
    fn test_negative_amounts() {
        // Unreachable through validated input, but the formatter stays total
        assert_eq!(format_currency(-1234.5), "-₹1,234.50");
    }
}
