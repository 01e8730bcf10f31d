//! # Calculator Form
//!
//! The raw text a presentation layer collects, and the single step that turns
//! it into a result.
//!
//! ## Form Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  user edits a field                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.quantity = "3"          (caller updates the text)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.evaluate() ← THIS MODULE                                          │
//! │       ├── parse text ──fail──► Err: show nothing                        │
//! │       ├── discount::compute ──fail──► Err: show nothing                 │
//! │       └── Ok(result) ──► breakdown / formatted fields                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no change tracking: the caller calls `evaluate` again whenever
//! any field changes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::breakdown::{FormattedDiscountResult, PriceBreakdown};
use crate::config::CalculatorConfig;
use crate::discount::compute;
use crate::types::{DiscountInput, DiscountKind, DiscountResult};
use crate::validation::{parse_decimal, parse_integer, ValidationResult};

/// Field values exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorForm {
    pub unit_price: String,
    /// `"percentage"` or `"fixed"`.
    pub discount_kind: String,
    pub discount_value: String,
    pub quantity: String,
    pub tax_rate: String,
    pub apply_tax: bool,
    pub currency_code: String,
}

impl Default for CalculatorForm {
    /// The values a fresh form opens with: 100 at 20% off, one item,
    /// 8.5% tax switched off, in dollars.
    fn default() -> Self {
        CalculatorForm::from_config(&CalculatorConfig::default())
    }
}

impl CalculatorForm {
    /// A fresh form using the configured currency and tax defaults.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        CalculatorForm {
            unit_price: "100".to_string(),
            discount_kind: DiscountKind::Percentage.to_string(),
            discount_value: "20".to_string(),
            quantity: "1".to_string(),
            tax_rate: config.tax_rate.to_string(),
            apply_tax: config.apply_tax,
            currency_code: config.currency_code.clone(),
        }
    }

    /// Parses every field into calculation input.
    pub fn parse(&self) -> ValidationResult<DiscountInput> {
        Ok(DiscountInput {
            unit_price: parse_decimal("unit_price", &self.unit_price)?,
            discount_kind: self.discount_kind.parse()?,
            discount_value: parse_decimal("discount_value", &self.discount_value)?,
            quantity: parse_integer("quantity", &self.quantity)?,
            tax_rate: parse_decimal("tax_rate", &self.tax_rate)?,
            apply_tax: self.apply_tax,
        })
    }

    /// Parses and computes.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::CalculatorForm;
    ///
    /// let mut form = CalculatorForm::default();
    /// assert_eq!(form.evaluate().unwrap().total_due, 80.0);
    ///
    /// form.quantity = "none".to_string();
    /// assert!(form.evaluate().is_err());
    /// ```
    pub fn evaluate(&self) -> ValidationResult<DiscountResult> {
        compute(&self.parse()?)
    }

    /// Every amount formatted in the form's currency, or `None` while the
    /// input is invalid.
    pub fn formatted(&self) -> Option<FormattedDiscountResult> {
        let result = self.evaluate().ok()?;
        Some(FormattedDiscountResult::new(&result, &self.currency_code))
    }

    /// Breakdown rows, or `None` while the input is invalid.
    pub fn breakdown(&self) -> Option<PriceBreakdown> {
        let result = self.evaluate().ok()?;
        Some(PriceBreakdown::new(
            &result,
            &self.tax_rate,
            self.apply_tax,
            &self.currency_code,
        ))
    }
}
