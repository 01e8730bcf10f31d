//! # pricewise-core: Pure Discount Calculator
//!
//! This crate turns a unit price, quantity, discount and optional tax rate
//! into the price a shopper pays, and renders amounts for display.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricewise Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer (form)                    │   │
//! │  │    price ─ quantity ─ discount ─ tax ─ currency text fields     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw strings                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricewise-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   form    │─►│ discount  │─►│ currency  │─►│ breakdown │  │   │
//! │  │   │  parsing  │  │  compute  │  │  format   │  │   lines   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input/result value types
//! - [`discount`] - The discount engine
//! - [`currency`] - Currency display formatting
//! - [`breakdown`] - Formatted results and display lines
//! - [`form`] - Raw text form state and parsing
//! - [`config`] - Environment-driven defaults
//! - [`validation`] - Field rules
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricewise_core::{calculate_discount, format_currency, DiscountKind};
//!
//! let result = calculate_discount(100.0, DiscountKind::Percentage, 20.0, 1, 8.5, true)
//!     .expect("valid input");
//!
//! assert_eq!(result.price_after_discount, 80.0);
//! assert!((result.total_due - 86.8).abs() < 1e-9);
//! assert_eq!(format_currency(1234.5, "usd"), "$1,234.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod config;
pub mod currency;
pub mod discount;
pub mod error;
pub mod form;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakdown::{BreakdownLine, FormattedDiscountResult, PriceBreakdown};
pub use config::CalculatorConfig;
pub use currency::{format_currency, format_percentage, format_usd, CurrencyFormatter};
pub use discount::{calculate_discount, compute};
pub use error::{ConfigError, ValidationError};
pub use form::CalculatorForm;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency used when the caller does not pick one.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// The one currency displayed without fractional digits (Cambodian riel).
pub const ZERO_DECIMAL_CURRENCY_CODE: &str = "KHR";

/// Rendered in place of amounts that cannot be displayed (NaN, infinity).
pub const PLACEHOLDER: &str = "—";

/// Upper bound for a percentage discount.
pub const MAX_PERCENTAGE: f64 = 100.0;
