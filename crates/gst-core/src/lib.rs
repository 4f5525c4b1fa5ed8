//! # gst-core: Pure Calculation Logic for GST Calc
//!
//! This crate is the **heart** of GST Calc. It contains the GST arithmetic,
//! amount validation, currency formatting, and scenario name cleanup as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GST Calc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation Layer (external)                     │   │
//! │  │    Category Picker ──► Amount Entry ──► Result Cards            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ gst-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │calculator │  │ validation│  │   names   │  │   │
//! │  │   │ Scenario  │  │ GST math  │  │  amounts  │  │  cleanup  │  │   │
//! │  │   │ Breakdown │  │ CGST/SGST │  │  ₹ limits │  │   table   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    gst-db (Database Layer)                      │   │
//! │  │           SQLite queries, migrations, rate resolver             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Scenario, RateBreakdown, rate rows)
//! - [`calculator`] - GST amount and CGST/SGST breakdown arithmetic
//! - [`validation`] - Amount parsing and limit checks
//! - [`currency`] - Rupee formatting for display
//! - [`names`] - Technical-to-everyday scenario name conversion
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **No Early Rounding**: GST amounts stay full-precision f64; rounding to
//!    two decimals happens only at formatting time
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gst_core::calculator::calculate_gst;
//! use gst_core::validation::validate_amount;
//!
//! // Parse the user's raw amount string (separators and ₹ are fine)
//! let amount = validate_amount("1,000").unwrap();
//!
//! // 18% GST on ₹1000
//! let result = calculate_gst(amount, 18.0);
//! assert_eq!(result.gst_amount, 180.0);
//! assert_eq!(result.total_amount, 1180.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod currency;
pub mod error;
pub mod names;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gst_core::Scenario` instead of
// `use gst_core::types::Scenario`

pub use calculator::{calculate_gst, calculate_gst_breakdown};
pub use currency::format_currency;
pub use error::AmountError;
pub use types::*;
pub use validation::validate_amount;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum amount accepted by the calculator, in Rupees (one crore).
///
/// ## Business Reason
/// The tool targets consumer purchases; anything above ₹1,00,00,000 is almost
/// certainly a typo and would only produce misleading output.
pub const MAX_AMOUNT: f64 = 10_000_000.0;

/// Maximum length of a scenario description shown to the user.
///
/// CBIC tariff descriptions run to whole paragraphs; anything longer than
/// this is cut and marked with an ellipsis.
pub const MAX_DESCRIPTION_LEN: usize = 100;
