//! # Result Display
//!
//! Display-ready views of a [`DiscountResult`]: every amount formatted in the
//! chosen currency, and the ordered rows of the price breakdown panel.
//!
//! ## Breakdown Layout
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  You Save                $20.00 (20.0% off)  │
//! │  Original Price                     $100.00  │
//! │  Discount                           -$20.00  │
//! │  Price After Discount                $80.00  │
//! │  Tax (8.5%)                          +$6.80  │  ◄── only with tax
//! │  Final Total                         $86.80  │  ◄── "Final Price" without tax
//! └──────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{format_percentage, CurrencyFormatter};
use crate::types::DiscountResult;

// =============================================================================
// Formatted Result
// =============================================================================

/// A result together with the display text of each field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDiscountResult {
    /// Raw numbers, flattened into the same object for the frontend.
    #[serde(flatten)]
    pub result: DiscountResult,
    pub subtotal_formatted: String,
    pub discount_amount_formatted: String,
    pub price_after_discount_formatted: String,
    pub tax_amount_formatted: String,
    pub total_due_formatted: String,
    /// Two decimals, e.g. `"6.67%"`.
    pub savings_percent_formatted: String,
}

impl FormattedDiscountResult {
    /// Formats every amount of `result` in `currency_code`.
    ///
    /// ## Example
    /// ```rust
    /// use pricewise_core::{calculate_discount, DiscountKind, FormattedDiscountResult};
    ///
    /// let result = calculate_discount(50.0, DiscountKind::Fixed, 10.0, 3, 0.0, false).unwrap();
    /// let formatted = FormattedDiscountResult::new(&result, "USD");
    ///
    /// assert_eq!(formatted.subtotal_formatted, "$150.00");
    /// assert_eq!(formatted.savings_percent_formatted, "6.67%");
    /// ```
    pub fn new(result: &DiscountResult, currency_code: &str) -> Self {
        let fmt = CurrencyFormatter::new(currency_code);
        FormattedDiscountResult {
            result: *result,
            subtotal_formatted: fmt.format(result.subtotal),
            discount_amount_formatted: fmt.format(result.discount_amount),
            price_after_discount_formatted: fmt.format(result.price_after_discount),
            tax_amount_formatted: fmt.format(result.tax_amount),
            total_due_formatted: fmt.format(result.total_due),
            savings_percent_formatted: format_percentage(result.savings_percent),
        }
    }
}

// =============================================================================
// Breakdown Lines
// =============================================================================

/// One labelled row of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakdownLine {
    pub label: String,
    pub value: String,
}

impl BreakdownLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        BreakdownLine {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered rows describing where the shopper's money goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    pub lines: Vec<BreakdownLine>,
}

impl PriceBreakdown {
    /// Builds the rows for `result`.
    ///
    /// `tax_rate` is the rate as the user typed it. It only appears in the
    /// tax row label, so `"8.50"` stays `"Tax (8.50%)"`, and only when
    /// `apply_tax` is set.
    pub fn new(
        result: &DiscountResult,
        tax_rate: &str,
        apply_tax: bool,
        currency_code: &str,
    ) -> Self {
        let fmt = CurrencyFormatter::new(currency_code);
        let saved = fmt.format(result.discount_amount);

        let mut lines = vec![
            BreakdownLine::new(
                "You Save",
                format!("{saved} ({:.1}% off)", result.savings_percent),
            ),
            BreakdownLine::new("Original Price", fmt.format(result.subtotal)),
            BreakdownLine::new("Discount", format!("-{saved}")),
            BreakdownLine::new("Price After Discount", fmt.format(result.price_after_discount)),
        ];

        if apply_tax {
            lines.push(BreakdownLine::new(
                format!("Tax ({}%)", tax_rate.trim()),
                format!("+{}", fmt.format(result.tax_amount)),
            ));
            lines.push(BreakdownLine::new("Final Total", fmt.format(result.total_due)));
        } else {
            lines.push(BreakdownLine::new(
                "Final Price",
                fmt.format(result.price_after_discount),
            ));
        }

        PriceBreakdown { lines }
    }

    /// Value of the last row: what the shopper pays.
    pub fn amount_due(&self) -> Option<&str> {
        self.lines.last().map(|line| line.value.as_str())
    }
}

/// Two aligned columns, one row per line.
impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .lines
            .iter()
            .map(|line| line.label.chars().count())
            .max()
            .unwrap_or(0);
        let value_width = self
            .lines
            .iter()
            .map(|line| line.value.chars().count())
            .max()
            .unwrap_or(0);

        for line in &self.lines {
            writeln!(
                f,
                "{:<label_width$}  {:>value_width$}",
                line.label, line.value
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
