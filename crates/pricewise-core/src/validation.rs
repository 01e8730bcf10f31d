//! # Validation Module
//!
//! Field rules for the discount engine, plus the lenient number parsing the
//! form applies to raw text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form text                                                     │
//! │  └── parse_decimal / parse_integer (leading-number rules)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Field rules (THIS MODULE)                                    │
//! │  ├── finite, positive, non-negative                                    │
//! │  └── discount bounds (≤ 100%, ≤ subtotal)                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: discount::compute                                            │
//! │  └── arithmetic on values that passed every rule                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricewise_core::validation::{validate_quantity, validate_unit_price};
//!
//! assert!(validate_unit_price(19.99).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::types::DiscountKind;
use crate::MAX_PERCENTAGE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

fn require_finite(field: &'static str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

/// Validates the price of a single item.
///
/// ## Rules
/// - Must be finite
/// - Must be positive (> 0); free items have nothing to discount
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    require_finite("unit_price", price)?;

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive { field: "unit_price" });
    }

    Ok(())
}

/// Validates an item count.
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-2).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    Ok(())
}

/// Validates a tax percentage.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative; there is no upper bound
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    require_finite("tax_rate", rate)?;

    if rate < 0.0 {
        return Err(ValidationError::Negative { field: "tax_rate" });
    }

    Ok(())
}

/// Validates a discount value against its kind and the subtotal it reduces.
///
/// ## Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  finite? ──no──► NotFinite                                              │
/// │     │                                                                   │
/// │  ≥ 0?   ──no──► Negative                                                │
/// │     │                                                                   │
/// │  Percentage: value ≤ 100?       ──no──► PercentageOutOfRange           │
/// │  Fixed:      value ≤ subtotal?  ──no──► DiscountExceedsSubtotal        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Exactly 100% and exactly the subtotal are both accepted.
pub fn validate_discount_value(
    kind: DiscountKind,
    value: f64,
    subtotal: f64,
) -> ValidationResult<()> {
    require_finite("discount_value", value)?;

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: "discount_value",
        });
    }

    match kind {
        DiscountKind::Percentage if value > MAX_PERCENTAGE => {
            Err(ValidationError::PercentageOutOfRange { value })
        }
        DiscountKind::Fixed if value > subtotal => Err(ValidationError::DiscountExceedsSubtotal {
            discount: value,
            subtotal,
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Text Parsing
// =============================================================================

/// Parses the leading decimal number of a form field.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12.5 kg"` reads as `12.5`. A leading `Infinity` parses to infinity
/// (and is later rejected as non-finite). Text with no leading digits is
/// [`ValidationError::NotANumber`].
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::parse_decimal;
///
/// assert_eq!(parse_decimal("price", " 12.5kg").unwrap(), 12.5);
/// assert_eq!(parse_decimal("price", "-.5").unwrap(), -0.5);
/// assert!(parse_decimal("price", "abc").is_err());
/// ```
pub fn parse_decimal(field: &'static str, input: &str) -> ValidationResult<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return Ok(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return Err(ValidationError::NotANumber {
            field,
            input: input.to_string(),
        });
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().map_err(|_| ValidationError::NotANumber {
        field,
        input: input.to_string(),
    })
}

/// Parses the leading base-10 integer of a form field.
///
/// `"3.9"` reads as `3`, `"12 pcs"` as `12`. Values beyond the `i64` range
/// saturate, so an absurdly large quantity is still a quantity.
///
/// ## Example
/// ```rust
/// use pricewise_core::validation::parse_integer;
///
/// assert_eq!(parse_integer("quantity", "3.9").unwrap(), 3);
/// assert!(parse_integer("quantity", "x3").is_err());
/// ```
pub fn parse_integer(field: &'static str, input: &str) -> ValidationResult<i64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return Err(ValidationError::NotANumber {
            field,
            input: input.to_string(),
        });
    }

    match text[..end].parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Ok(i64::MAX),
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(0.01).is_ok());
        assert!(validate_unit_price(1_000_000.0).is_ok());

        assert_eq!(
            validate_unit_price(0.0),
            Err(ValidationError::MustBePositive { field: "unit_price" })
        );
        assert!(validate_unit_price(-5.0).is_err());
        assert_eq!(
            validate_unit_price(f64::NAN),
            Err(ValidationError::NotFinite { field: "unit_price" })
        );
        assert!(validate_unit_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999_999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(8.5).is_ok());
        assert!(validate_tax_rate(250.0).is_ok());
        assert!(validate_tax_rate(-0.1).is_err());
        assert!(validate_tax_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_percentage_bounds() {
        let kind = DiscountKind::Percentage;
        assert!(validate_discount_value(kind, 0.0, 10.0).is_ok());
        assert!(validate_discount_value(kind, 100.0, 10.0).is_ok());
        assert_eq!(
            validate_discount_value(kind, 100.01, 10.0),
            Err(ValidationError::PercentageOutOfRange { value: 100.01 })
        );
        assert!(validate_discount_value(kind, -1.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_fixed_bounds() {
        let kind = DiscountKind::Fixed;
        assert!(validate_discount_value(kind, 50.0, 50.0).is_ok());
        // Fixed discounts are not capped at 100
        assert!(validate_discount_value(kind, 150.0, 200.0).is_ok());
        assert_eq!(
            validate_discount_value(kind, 200.0, 50.0),
            Err(ValidationError::DiscountExceedsSubtotal {
                discount: 200.0,
                subtotal: 50.0
            })
        );
        assert!(validate_discount_value(kind, f64::INFINITY, 50.0).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("f", "100"), Ok(100.0));
        assert_eq!(parse_decimal("f", "8.5"), Ok(8.5));
        assert_eq!(parse_decimal("f", "  42abc"), Ok(42.0));
        assert_eq!(parse_decimal("f", ".75"), Ok(0.75));
        assert_eq!(parse_decimal("f", "5."), Ok(5.0));
        assert_eq!(parse_decimal("f", "+3"), Ok(3.0));
        assert_eq!(parse_decimal("f", "1e3"), Ok(1000.0));
        assert_eq!(parse_decimal("f", "2e"), Ok(2.0));
        assert_eq!(parse_decimal("f", "1.2.3"), Ok(1.2));
        assert_eq!(parse_decimal("f", "Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_decimal("f", "-Infinity"), Ok(f64::NEG_INFINITY));

        for bad in ["", "   ", "abc", ".", "-", "+.", "e5"] {
            assert!(parse_decimal("f", bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("q", "3"), Ok(3));
        assert_eq!(parse_integer("q", " 12 pcs"), Ok(12));
        assert_eq!(parse_integer("q", "3.9"), Ok(3));
        assert_eq!(parse_integer("q", "-2"), Ok(-2));

        assert!(matches!(
            parse_integer("q", "abc"),
            Err(ValidationError::NotANumber { field: "q", .. })
        ));
        assert!(parse_integer("q", "").is_err());
        assert!(parse_integer("q", ".5").is_err());
        assert_eq!(parse_integer("q", "99999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_integer("q", "-99999999999999999999"), Ok(i64::MIN));
    }
}
