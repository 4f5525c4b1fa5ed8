//! # Domain Types
//!
//! Core domain types used throughout GST Calc.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Scenario     │   │  RateBreakdown  │   │    GoodsRate    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  cgst (f64)     │   │  hsn_code       │       │
//! │  │  hsn/sac code   │   │  sgst (f64)     │   │  cgst/sgst/igst │       │
//! │  │  gst_rate       │   │  9.0 + 9.0      │   │  compensation   │       │
//! │  │  breakdown      │   │  = 18% combined │   │  cess           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  A Scenario is built from exactly ONE resolved rate row - goods or     │
//! │  services - so its CGST and SGST always come from the same source.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Code Identity Pattern
//! Every scenario carries at most one classification code:
//! - `hsn_code`: Harmonized System of Nomenclature - classifies goods
//! - `sac_code`: Services Accounting Code - classifies services

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MAX_DESCRIPTION_LEN;

// =============================================================================
// Rate Breakdown
// =============================================================================

/// The CGST/SGST split of a GST rate, in percentage points.
///
/// For intra-state transactions GST is collected in two equal halves:
/// central (CGST) and state (SGST). An 18% rate splits as 9 + 9.
///
/// Serializes with the uppercase keys the presentation layer expects:
/// `{"CGST": 9.0, "SGST": 9.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    /// Central GST component.
    #[serde(rename = "CGST")]
    pub cgst: f64,

    /// State GST component.
    #[serde(rename = "SGST")]
    pub sgst: f64,
}

impl RateBreakdown {
    /// Creates a breakdown from its two components.
    #[inline]
    pub const fn new(cgst: f64, sgst: f64) -> Self {
        RateBreakdown { cgst, sgst }
    }

    /// Returns the combined rate (CGST + SGST).
    ///
    /// For consistent source data this equals the nominal IGST rate, but the
    /// tables are not verified consistent - callers must not assume exact
    /// equality with [`Scenario::gst_rate`].
    #[inline]
    pub fn combined(&self) -> f64 {
        self.cgst + self.sgst
    }
}

// =============================================================================
// Scenario
// =============================================================================

/// A purchase scenario with its resolved, currently-effective GST rates.
///
/// Built by the rate resolver from the single most-recently-effective active
/// rate row for the scenario's HSN or SAC code. Ephemeral: recomputed per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// User-facing display name (already prettified, see [`crate::names`]).
    pub name: String,

    /// Tariff description, truncated to [`MAX_DESCRIPTION_LEN`] characters.
    /// Empty string when the source row has no description.
    pub description: String,

    /// Nominal combined rate in percent (the IGST rate; 0.0 when absent).
    pub gst_rate: f64,

    /// CGST/SGST split of the rate.
    pub breakdown: RateBreakdown,

    /// HSN code when this scenario is goods.
    pub hsn_code: Option<String>,

    /// SAC code when this scenario is a service.
    pub sac_code: Option<String>,
}

/// Truncates a tariff description for display.
///
/// Descriptions longer than [`MAX_DESCRIPTION_LEN`] characters are cut and
/// marked with "..."; a missing description becomes the empty string.
/// Character-wise, so multi-byte text never splits mid-character.
///
/// ## Example
/// ```rust
/// use gst_core::types::short_description;
///
/// assert_eq!(short_description(Some("Aerated waters")), "Aerated waters");
/// assert_eq!(short_description(None), "");
/// ```
pub fn short_description(description: Option<&str>) -> String {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LEN => {
            let mut cut: String = text.chars().take(MAX_DESCRIPTION_LEN).collect();
            cut.push_str("...");
            cut
        }
        Some(text) => text.to_string(),
        None => String::new(),
    }
}

// =============================================================================
// Rate Rows (code search results)
// =============================================================================

/// The current rate row for an HSN code, as returned by code search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsRate {
    /// HSN code the rates apply to.
    pub hsn_code: String,

    /// Tariff description from the source row.
    pub description: Option<String>,

    /// Central GST rate in percent.
    pub cgst_rate: f64,

    /// State GST rate in percent.
    pub sgst_rate: f64,

    /// Integrated GST rate in percent (inter-state; the nominal rate).
    pub igst_rate: f64,

    /// Compensation cess in percent (luxury/demerit goods; usually 0).
    pub compensation_cess: f64,
}

/// The current rate row for a SAC code, as returned by code search.
///
/// Services carry no compensation cess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesRate {
    /// SAC code the rates apply to.
    pub sac_code: String,

    /// Tariff description from the source row.
    pub description: Option<String>,

    /// Central GST rate in percent.
    pub cgst_rate: f64,

    /// State GST rate in percent.
    pub sgst_rate: f64,

    /// Integrated GST rate in percent (inter-state; the nominal rate).
    pub igst_rate: f64,
}

// =============================================================================
// Reference-Data Statistics
// =============================================================================

/// Summary statistics over the loaded rate tables.
///
/// Used by the presentation layer for its "rates current as of" footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateStats {
    /// Distinct HSN codes with at least one rate row.
    pub goods_count: i64,

    /// Distinct SAC codes with at least one rate row.
    pub services_count: i64,

    /// Distinct category names.
    pub categories_count: i64,

    /// Most recent rate-table update, across goods and services.
    /// None when no rates are loaded.
    pub last_updated: Option<DateTime<Utc>>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_combined() {
        let breakdown = RateBreakdown::new(9.0, 9.0);
        assert_eq!(breakdown.combined(), 18.0);
    }

    #[test]
    fn test_breakdown_serializes_with_uppercase_keys() {
        let breakdown = RateBreakdown::new(2.5, 2.5);
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["CGST"], 2.5);
        assert_eq!(json["SGST"], 2.5);
    }

    #[test]
    fn test_short_description_passthrough() {
        assert_eq!(short_description(Some("Restaurant service")), "Restaurant service");
    }

    #[test]
    fn test_short_description_missing() {
        assert_eq!(short_description(None), "");
    }

    #[test]
    fn test_short_description_truncates_long_text() {
        let long = "x".repeat(150);
        let cut = short_description(Some(&long));
        assert_eq!(cut.chars().count(), 103); // 100 chars + "..."
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_short_description_exactly_at_limit() {
        let exact = "y".repeat(100);
        assert_eq!(short_description(Some(&exact)), exact);
    }

    #[test]
    fn test_short_description_is_character_aware() {
        // 101 multi-byte characters must cut cleanly at 100
        let text = "₹".repeat(101);
        let cut = short_description(Some(&text));
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.starts_with('₹'));
    }

    #[test]
    fn test_scenario_round_trips_through_json() {
        let scenario = Scenario {
            name: "Air Conditioner".to_string(),
            description: "Air conditioning machines".to_string(),
            gst_rate: 18.0,
            breakdown: RateBreakdown::new(9.0, 9.0),
            hsn_code: Some("8415".to_string()),
            sac_code: None,
        };

        let json = serde_json::to_string(&scenario).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }
}
