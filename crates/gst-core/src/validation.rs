//! # Validation Module
//!
//! Amount input validation for GST Calc.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Amount Validation Flow                             │
//! │                                                                         │
//! │  User enters: "₹50,000"                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_amount ← THIS MODULE                                         │
//! │       │                                                                 │
//! │       ├── strip "," and "₹", trim                                      │
//! │       │                                                                 │
//! │       ├── not a finite number?  → Err(InvalidFormat)                   │
//! │       │                                                                 │
//! │       ├── amount <= 0?          → Err(NonPositive)                     │
//! │       │                                                                 │
//! │       ├── amount > 1 crore?     → Err(ExceedsLimit)                    │
//! │       │                                                                 │
//! │       └── OK → Ok(50000.0)                                             │
//! │                                                                         │
//! │  Never a silent clamp: out-of-range input is an error, not a fixup.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::validation::validate_amount;
//!
//! assert_eq!(validate_amount("50,000").unwrap(), 50000.0);
//! assert!(validate_amount("abc").is_err());
//! ```

use crate::error::{AmountError, AmountResult};
use crate::MAX_AMOUNT;

/// Validates and parses a raw amount string into a positive Rupee amount.
///
/// ## Rules
/// - Thousands separators (`,`) and the Rupee sign (`₹`) are stripped
/// - Must parse as a finite number
/// - Must be greater than zero
/// - Must not exceed [`MAX_AMOUNT`] (one crore)
///
/// ## Returns
/// The validated amount, or the specific reason it was rejected - the caller
/// reports the error text verbatim.
///
/// ## Example
/// ```rust
/// use gst_core::validation::validate_amount;
/// use gst_core::error::AmountError;
///
/// assert_eq!(validate_amount("₹1,234.50").unwrap(), 1234.5);
/// assert_eq!(validate_amount("0"), Err(AmountError::NonPositive));
/// assert_eq!(validate_amount("20000000"), Err(AmountError::ExceedsLimit));
/// ```
pub fn validate_amount(raw: &str) -> AmountResult<f64> {
    let cleaned = raw.trim().replace(',', "").replace('₹', "");

    let amount: f64 = cleaned.parse().map_err(|_| AmountError::InvalidFormat)?;

    // f64::parse accepts "NaN" and "inf"; neither is a real amount
    if !amount.is_finite() {
        return Err(AmountError::InvalidFormat);
    }

    if amount <= 0.0 {
        return Err(AmountError::NonPositive);
    }

    if amount > MAX_AMOUNT {
        return Err(AmountError::ExceedsLimit);
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_amount() {
        assert_eq!(validate_amount("1000").unwrap(), 1000.0);
        assert_eq!(validate_amount("1234.56").unwrap(), 1234.56);
    }

    #[test]
    fn test_separators_and_rupee_sign_stripped() {
        assert_eq!(validate_amount("50,000").unwrap(), 50000.0);
        assert_eq!(validate_amount("₹50,000").unwrap(), 50000.0);
        assert_eq!(validate_amount("  ₹1,00,000  ").unwrap(), 100000.0);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(validate_amount("abc"), Err(AmountError::InvalidFormat));
        assert_eq!(validate_amount(""), Err(AmountError::InvalidFormat));
        assert_eq!(validate_amount("12.34.56"), Err(AmountError::InvalidFormat));
    }

    #[test]
    fn test_non_finite_rejected() {
        // Rust's f64 parser accepts these spellings; the validator must not
        assert_eq!(validate_amount("NaN"), Err(AmountError::InvalidFormat));
        assert_eq!(validate_amount("inf"), Err(AmountError::InvalidFormat));
        assert_eq!(validate_amount("-inf"), Err(AmountError::InvalidFormat));
    }

    #[test]
    fn test_non_positive() {
        assert_eq!(validate_amount("0"), Err(AmountError::NonPositive));
        assert_eq!(validate_amount("-5"), Err(AmountError::NonPositive));
        assert_eq!(validate_amount("-0.01"), Err(AmountError::NonPositive));
    }

    #[test]
    fn test_exceeds_limit() {
        assert_eq!(validate_amount("20000000"), Err(AmountError::ExceedsLimit));
        assert_eq!(
            validate_amount("10000000.01"),
            Err(AmountError::ExceedsLimit)
        );
    }

    #[test]
    fn test_exactly_at_limit_is_accepted() {
        // One crore itself is allowed; only amounts above it are rejected
        assert_eq!(validate_amount("10000000").unwrap(), 10_000_000.0);
        assert_eq!(validate_amount("1,00,00,000").unwrap(), 10_000_000.0);
    }
}
