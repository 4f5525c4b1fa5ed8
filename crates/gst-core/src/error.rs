//! # Error Types
//!
//! Validation error types for gst-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gst-core errors (this file)                                           │
//! │  └── AmountError      - Amount input validation failures               │
//! │                                                                         │
//! │  gst-db errors (separate crate)                                        │
//! │  └── DbError          - Rate store operation failures                  │
//! │                                                                         │
//! │  Flow: AmountError → shown verbatim to the user                        │
//! │        DbError     → logged; caller degrades to an empty rate list     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant's message is the user-facing text, reported as-is

use thiserror::Error;

// =============================================================================
// Amount Error
// =============================================================================

/// Amount input validation errors.
///
/// These occur when the raw amount string entered by the user cannot be
/// turned into a usable base amount. The message text is what the user sees;
/// validation never clamps silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input is not a parseable number.
    ///
    /// ## When This Occurs
    /// - Letters or stray symbols in the amount field
    /// - More than one decimal point
    /// - Non-finite parses (NaN, infinity)
    #[error("Please enter a valid amount")]
    InvalidFormat,

    /// Amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositive,

    /// Amount exceeds the one crore cap.
    #[error("Amount cannot exceed ₹1,00,00,000")]
    ExceedsLimit,
}

/// Convenience type alias for amount validation results.
pub type AmountResult<T> = Result<T, AmountError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            AmountError::InvalidFormat.to_string(),
            "Please enter a valid amount"
        );
        assert_eq!(
            AmountError::NonPositive.to_string(),
            "Amount must be greater than zero"
        );
        assert_eq!(
            AmountError::ExceedsLimit.to_string(),
            "Amount cannot exceed ₹1,00,00,000"
        );
    }
}
