//! # Calculator Module
//!
//! GST percentage arithmetic: the combined-rate calculation and the
//! CGST/SGST breakdown calculation.
//!
//! ## Precision Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NO ROUNDING AT THIS LAYER                                              │
//! │                                                                         │
//! │  calculate_gst(999.99, 18.0).gst_amount = 179.99820000000002           │
//! │                                                                         │
//! │  The full-precision f64 is the result. Rounding to two decimals        │
//! │  happens exactly once, at formatting time (see currency module).       │
//! │                                                                         │
//! │  Also: total_gst from the breakdown path is computed as                │
//! │  cgst_amount + sgst_amount, NOT from the combined rate. The two        │
//! │  paths may differ by float epsilon; both values are correct.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gst_core::calculator::{calculate_gst, calculate_gst_breakdown};
//! use gst_core::types::RateBreakdown;
//!
//! let result = calculate_gst(1000.0, 18.0);
//! assert_eq!(result.total_amount, 1180.0);
//!
//! let split = calculate_gst_breakdown(1000.0, &RateBreakdown::new(9.0, 9.0));
//! assert_eq!(split.cgst_amount, 90.0);
//! assert_eq!(split.sgst_amount, 90.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::RateBreakdown;

// =============================================================================
// Calculation Results
// =============================================================================

/// Result of a combined-rate GST calculation.
///
/// Ephemeral, derived value - recomputed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstCalculation {
    /// The amount the tax applies to.
    pub base_amount: f64,

    /// Nominal GST rate in percent.
    pub gst_rate: f64,

    /// Tax amount: `base_amount * gst_rate / 100`.
    pub gst_amount: f64,

    /// Base plus tax.
    pub total_amount: f64,
}

/// Result of a CGST/SGST breakdown calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakdownCalculation {
    /// Central GST rate in percent.
    pub cgst_rate: f64,

    /// State GST rate in percent.
    pub sgst_rate: f64,

    /// Central GST amount.
    pub cgst_amount: f64,

    /// State GST amount.
    pub sgst_amount: f64,

    /// Sum of the two component amounts.
    ///
    /// Computed independently from the combined-rate path; may differ from
    /// [`GstCalculation::gst_amount`] by float epsilon when the source data's
    /// CGST+SGST does not sum exactly to the nominal rate.
    pub total_gst: f64,
}

// =============================================================================
// Calculations
// =============================================================================

/// Calculates the GST amount and total for a base amount at a combined rate.
///
/// Pure function, no I/O, no state.
///
/// ## Arguments
/// * `base_amount` - Positive amount in Rupees (validate first, see
///   [`crate::validation::validate_amount`])
/// * `gst_rate` - Combined rate in percent, 0 to 100
///
/// ## Example
/// ```rust
/// use gst_core::calculator::calculate_gst;
///
/// let result = calculate_gst(50000.0, 28.0);
/// assert_eq!(result.gst_amount, 14000.0);
/// assert_eq!(result.total_amount, 64000.0);
/// ```
pub fn calculate_gst(base_amount: f64, gst_rate: f64) -> GstCalculation {
    let gst_amount = base_amount * gst_rate / 100.0;

    GstCalculation {
        base_amount,
        gst_rate,
        gst_amount,
        total_amount: base_amount + gst_amount,
    }
}

/// Calculates the CGST and SGST amounts for a base amount.
///
/// Each component is computed from its own rate; `total_gst` is their sum,
/// never derived from the nominal combined rate.
///
/// ## Arguments
/// * `base_amount` - Positive amount in Rupees
/// * `breakdown` - The CGST/SGST rate pair from the resolved scenario
///
/// ## Example
/// ```rust
/// use gst_core::calculator::calculate_gst_breakdown;
/// use gst_core::types::RateBreakdown;
///
/// let split = calculate_gst_breakdown(1000.0, &RateBreakdown::new(2.5, 2.5));
/// assert_eq!(split.total_gst, 50.0);
/// ```
pub fn calculate_gst_breakdown(
    base_amount: f64,
    breakdown: &RateBreakdown,
) -> BreakdownCalculation {
    let cgst_amount = base_amount * breakdown.cgst / 100.0;
    let sgst_amount = base_amount * breakdown.sgst / 100.0;

    BreakdownCalculation {
        cgst_rate: breakdown.cgst,
        sgst_rate: breakdown.sgst,
        cgst_amount,
        sgst_amount,
        total_gst: cgst_amount + sgst_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_calculate_gst_basic() {
        let result = calculate_gst(1000.0, 18.0);
        assert_eq!(result.base_amount, 1000.0);
        assert_eq!(result.gst_rate, 18.0);
        assert_eq!(result.gst_amount, 180.0);
        assert_eq!(result.total_amount, 1180.0);
    }

    #[test]
    fn test_calculate_gst_zero_rate() {
        // Exempt items: 0% GST, total equals base
        let result = calculate_gst(500.0, 0.0);
        assert_eq!(result.gst_amount, 0.0);
        assert_eq!(result.total_amount, 500.0);
    }

    #[test]
    fn test_total_identity_across_rates() {
        // totalAmount == amount + amount*rate/100 for a spread of rates
        for &rate in &[0.0, 0.25, 3.0, 5.0, 12.0, 18.0, 28.0, 100.0] {
            for &amount in &[1.0, 999.99, 12345.67, 10_000_000.0] {
                let result = calculate_gst(amount, rate);
                let expected = amount + amount * rate / 100.0;
                assert!(
                    (result.total_amount - expected).abs() < EPSILON,
                    "amount={} rate={}",
                    amount,
                    rate
                );
            }
        }
    }

    #[test]
    fn test_breakdown_basic() {
        let split = calculate_gst_breakdown(1000.0, &RateBreakdown::new(9.0, 9.0));
        assert_eq!(split.cgst_rate, 9.0);
        assert_eq!(split.sgst_rate, 9.0);
        assert_eq!(split.cgst_amount, 90.0);
        assert_eq!(split.sgst_amount, 90.0);
        assert_eq!(split.total_gst, 180.0);
    }

    #[test]
    fn test_breakdown_matches_combined_rate_within_epsilon() {
        // When CGST+SGST == rate, the two computation paths agree to epsilon
        let cases = [(18.0, 9.0, 9.0), (5.0, 2.5, 2.5), (28.0, 14.0, 14.0)];
        for (rate, cgst, sgst) in cases {
            let amount = 7777.77;
            let combined = calculate_gst(amount, rate);
            let split = calculate_gst_breakdown(amount, &RateBreakdown::new(cgst, sgst));
            assert!((split.total_gst - combined.gst_amount).abs() < EPSILON);
        }
    }

    #[test]
    fn test_no_rounding_at_this_layer() {
        // 999.99 * 18% = 179.9982 exactly in decimal; the f64 result keeps
        // full precision rather than being cut to two decimals
        let result = calculate_gst(999.99, 18.0);
        assert!((result.gst_amount - 179.9982).abs() < EPSILON);
        assert_ne!(result.gst_amount, 180.00);
    }

    /// Reference case: ₹1000 at 18% (9+9) through both paths.
    #[test]
    fn test_end_to_end_thousand_at_eighteen() {
        let combined = calculate_gst(1000.0, 18.0);
        let split = calculate_gst_breakdown(1000.0, &RateBreakdown::new(9.0, 9.0));

        assert_eq!(combined.gst_amount, 180.0);
        assert_eq!(combined.total_amount, 1180.0);
        assert_eq!(split.cgst_amount, 90.0);
        assert_eq!(split.sgst_amount, 90.0);
        assert_eq!(split.total_gst, 180.0);
    }
}
