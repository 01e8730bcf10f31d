//! # Domain Types
//!
//! Value types passed into and out of the discount engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                         ┌─────────────────────┐   │
//! │  │  DiscountInput  │      compute()          │   DiscountResult    │   │
//! │  │  ─────────────  │ ──────────────────────► │  ─────────────────  │   │
//! │  │  unit_price     │                         │  subtotal           │   │
//! │  │  discount_kind  │                         │  discount_amount    │   │
//! │  │  discount_value │                         │  price_after_disc.  │   │
//! │  │  quantity       │                         │  tax_amount         │   │
//! │  │  tax_rate       │                         │  total_due          │   │
//! │  │  apply_tax      │                         │  savings_percent    │   │
//! │  └─────────────────┘                         └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here has identity or a lifecycle: each calculation builds a fresh
//! input and gets back a fresh result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Discount Kind
// =============================================================================

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage of the subtotal, 0 to 100.
    Percentage,
    /// Currency amount taken off the subtotal.
    Fixed,
}

impl DiscountKind {
    /// Wire name, as the frontend sends it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::Percentage => "percentage",
            DiscountKind::Fixed => "fixed",
        }
    }
}

impl Default for DiscountKind {
    fn default() -> Self {
        DiscountKind::Percentage
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the kind from form text (case-insensitive, surrounding whitespace ignored).
///
/// ## Example
/// ```rust
/// use pricewise_core::DiscountKind;
///
/// assert_eq!("Fixed".parse::<DiscountKind>().unwrap(), DiscountKind::Fixed);
/// assert!("bogo".parse::<DiscountKind>().is_err());
/// ```
impl FromStr for DiscountKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(DiscountKind::Percentage),
            "fixed" => Ok(DiscountKind::Fixed),
            _ => Err(ValidationError::UnknownDiscountKind(s.to_string())),
        }
    }
}

// =============================================================================
// Discount Input
// =============================================================================

/// Numeric inputs for one calculation.
///
/// Values are taken as-is; [`crate::discount::compute`] decides whether they
/// form a valid calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountInput {
    /// Cost of one item before discount.
    pub unit_price: f64,

    /// Percentage or fixed amount.
    pub discount_kind: DiscountKind,

    /// 0-100 for percentages, a currency amount for fixed discounts.
    pub discount_value: f64,

    /// Number of items.
    pub quantity: i64,

    /// Tax percentage applied after the discount.
    pub tax_rate: f64,

    /// Whether `tax_rate` is applied at all.
    pub apply_tax: bool,
}

impl DiscountInput {
    /// Input with no tax applied.
    pub fn new(unit_price: f64, discount_kind: DiscountKind, discount_value: f64, quantity: i64) -> Self {
        DiscountInput {
            unit_price,
            discount_kind,
            discount_value,
            quantity,
            tax_rate: 0.0,
            apply_tax: false,
        }
    }

    /// Applies `tax_rate` percent on top of the discounted price.
    pub fn with_tax(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self.apply_tax = true;
        self
    }

    /// Unit price × quantity.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

// =============================================================================
// Discount Result
// =============================================================================

/// Price breakdown for one calculation. Amounts are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResult {
    /// Unit price × quantity.
    pub subtotal: f64,

    /// Absolute amount removed by the discount.
    pub discount_amount: f64,

    /// Subtotal − discount amount.
    pub price_after_discount: f64,

    /// Zero unless tax was applied.
    pub tax_amount: f64,

    /// Price after discount + tax amount.
    pub total_due: f64,

    /// Discount amount as a percentage of the subtotal.
    pub savings_percent: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
