//! # Error Types
//!
//! Domain-specific error types for pricewise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - input rejected, "no result to display yet"         │
//! │  ConfigError      - bad environment configuration at startup           │
//! │                                                                         │
//! │  The currency formatter has no error type: it always renders           │
//! │  something (fallback symbol table or placeholder).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in every message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Why a calculation input was rejected.
///
/// Every variant means the same thing to the caller: the inputs are not
/// (yet) a valid calculation. The variant only says which rule failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// NaN or infinite numeric input.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// Percentage discount above 100%.
    #[error("percentage discount {value} must be between 0 and 100")]
    PercentageOutOfRange { value: f64 },

    /// Fixed discount larger than the amount it is applied against.
    ///
    /// ## User Workflow
    /// ```text
    /// Price 50 × 1, fixed discount 200
    ///      │
    ///      ▼
    /// DiscountExceedsSubtotal { discount: 200, subtotal: 50 }
    ///      │
    ///      ▼
    /// Form shows no result
    /// ```
    #[error("fixed discount {discount} exceeds subtotal {subtotal}")]
    DiscountExceedsSubtotal { discount: f64, subtotal: f64 },

    /// Discount kind text that is neither percentage nor fixed.
    #[error("unknown discount kind: {0}")]
    UnknownDiscountKind(String),

    /// Raw form text that does not start with a number.
    #[error("{field} is not a number: {input:?}")]
    NotANumber { field: &'static str, input: String },
}

impl ValidationError {
    /// Field the rule applies to, for highlighting in the form.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotFinite { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::NotANumber { field, .. } => field,
            ValidationError::PercentageOutOfRange { .. }
            | ValidationError::DiscountExceedsSubtotal { .. } => "discount_value",
            ValidationError::UnknownDiscountKind(_) => "discount_kind",
        }
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
