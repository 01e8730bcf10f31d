//! # Discount Engine
//!
//! Turns a [`DiscountInput`] into a [`DiscountResult`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit_price × quantity ──► subtotal                                     │
//! │                               │                                         │
//! │            ┌──────────────────┴──────────────────┐                      │
//! │            ▼                                     ▼                      │
//! │   Percentage: subtotal × (v / 100)      Fixed: v                        │
//! │            └──────────────────┬──────────────────┘                      │
//! │                               ▼                                         │
//! │                        discount_amount                                  │
//! │                               │                                         │
//! │   subtotal − discount ──► price_after_discount                          │
//! │                               │                                         │
//! │   apply_tax? × rate / 100 ──► tax_amount                                │
//! │                               │                                         │
//! │   price_after_discount + tax ──► total_due                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here; display precision belongs to
//! [`crate::currency`]. A result whose amounts overflow to infinity is
//! rejected like any other invalid input.

use tracing::debug;

use crate::types::{DiscountInput, DiscountKind, DiscountResult};
use crate::validation::{
    validate_discount_value, validate_quantity, validate_tax_rate, validate_unit_price,
    ValidationResult,
};
use crate::ValidationError;

/// Computes the price breakdown for one set of inputs.
///
/// Any rule violation returns the error and no partial result. The caller
/// treats an error as "nothing to display yet".
///
/// ## Example
/// ```rust
/// use pricewise_core::{compute, DiscountInput, DiscountKind};
///
/// let input = DiscountInput::new(50.0, DiscountKind::Fixed, 10.0, 3);
/// let result = compute(&input).unwrap();
///
/// assert_eq!(result.subtotal, 150.0);
/// assert_eq!(result.price_after_discount, 140.0);
/// ```
pub fn compute(input: &DiscountInput) -> ValidationResult<DiscountResult> {
    check(input).inspect_err(|err| {
        debug!(field = err.field(), reason = %err, "discount input rejected");
    })?;

    let subtotal = input.subtotal();

    let discount_amount = match input.discount_kind {
        // scale the rate first so a huge subtotal cannot overflow mid-way
        DiscountKind::Percentage => subtotal * (input.discount_value / 100.0),
        DiscountKind::Fixed => input.discount_value,
    };

    let price_after_discount = subtotal - discount_amount;

    let tax_amount = if input.apply_tax {
        price_after_discount * input.tax_rate / 100.0
    } else {
        0.0
    };

    let result = DiscountResult {
        subtotal,
        discount_amount,
        price_after_discount,
        tax_amount,
        total_due: price_after_discount + tax_amount,
        // subtotal > 0 is guaranteed by check()
        savings_percent: discount_amount / subtotal * 100.0,
    };

    ensure_finite(&result).inspect_err(|err| {
        debug!(field = err.field(), "discount result overflowed");
    })?;

    Ok(result)
}

/// Positional form of [`compute`], in the order the form collects fields.
///
/// ## Example
/// ```rust
/// use pricewise_core::{calculate_discount, DiscountKind};
///
/// let result = calculate_discount(100.0, DiscountKind::Percentage, 20.0, 1, 8.5, false).unwrap();
/// assert_eq!(result.total_due, 80.0);
/// assert_eq!(result.tax_amount, 0.0);
/// ```
pub fn calculate_discount(
    unit_price: f64,
    discount_kind: DiscountKind,
    discount_value: f64,
    quantity: i64,
    tax_rate: f64,
    apply_tax: bool,
) -> ValidationResult<DiscountResult> {
    compute(&DiscountInput {
        unit_price,
        discount_kind,
        discount_value,
        quantity,
        tax_rate,
        apply_tax,
    })
}

fn check(input: &DiscountInput) -> ValidationResult<()> {
    validate_unit_price(input.unit_price)?;
    validate_quantity(input.quantity)?;
    validate_tax_rate(input.tax_rate)?;

    let subtotal = input.subtotal();
    if !subtotal.is_finite() {
        return Err(ValidationError::NotFinite { field: "subtotal" });
    }

    validate_discount_value(input.discount_kind, input.discount_value, subtotal)
}

/// Rejects results where a derived amount overflowed to infinity.
fn ensure_finite(result: &DiscountResult) -> ValidationResult<()> {
    let fields = [
        ("discount_amount", result.discount_amount),
        ("price_after_discount", result.price_after_discount),
        ("tax_amount", result.tax_amount),
        ("total_due", result.total_due),
        ("savings_percent", result.savings_percent),
    ];

    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(ValidationError::NotFinite { field: *field }),
        None => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
