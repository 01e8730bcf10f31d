//! # Currency Formatting
//!
//! Renders amounts for display. Formatting never fails: the worst case is a
//! fallback symbol or the [`PLACEHOLDER`].
//!
//! ## Formatting Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount finite? ──no──► "—"                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  precision: KHR → 0 decimals, everything else → 2                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rusty_money ISO table knows the code                                   │
//! │  AND its minor units match the precision? ──yes──► locale formatting   │
//! │       │                                             "$1,234.50"         │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  manual: symbol table + comma grouping ──────────► "៛1,235"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, Money};
use tracing::debug;

use crate::{DEFAULT_CURRENCY_CODE, PLACEHOLDER, ZERO_DECIMAL_CURRENCY_CODE};

/// Symbol used by the manual path when the code is not in [`FALLBACK_SYMBOLS`].
pub const GENERIC_SYMBOL: &str = "$";

/// Amounts at or above this are grouped by the manual path.
const ISO_GROUPING_LIMIT: u64 = 1_000_000_000_000;

/// Symbols for the manual formatting path.
const FALLBACK_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("KHR", "៛"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("THB", "฿"),
];

/// Formats amounts in one currency.
///
/// Known ISO codes render in their own locale convention, so `"EUR"` gives
/// `"€1.234,50"` rather than a dollar-style `"€1,234.50"`. Codes rusty_money
/// does not know use the manual path with `,` grouping and `.` decimals.
///
/// ## Example
/// ```rust
/// use pricewise_core::CurrencyFormatter;
///
/// let riel = CurrencyFormatter::new("khr");
/// assert_eq!(riel.code(), "KHR");
/// assert_eq!(riel.precision(), 0);
/// assert_eq!(riel.format(1234.5), "៛1,235");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    code: String,
    precision: u32,
}

impl CurrencyFormatter {
    /// Creates a formatter for `code`, matched case-insensitively.
    pub fn new(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        let precision = if code == ZERO_DECIMAL_CURRENCY_CODE { 0 } else { 2 };
        CurrencyFormatter { code, precision }
    }

    /// Normalized (upper-case) currency code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of fractional digits shown.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Formats `amount`, or returns the placeholder for NaN/infinity.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return PLACEHOLDER.to_string();
        }

        match self.format_iso(amount) {
            Some(text) => text,
            None => {
                debug!(currency = %self.code, "using manual currency formatting");
                self.format_manual(amount)
            }
        }
    }

    /// Locale-aware path. `None` when rusty_money cannot render this
    /// code/amount at the required precision.
    fn format_iso(&self, amount: f64) -> Option<String> {
        // ISO 4217 gives the riel two minor units; it is displayed with none.
        if self.code == ZERO_DECIMAL_CURRENCY_CODE {
            return None;
        }

        let currency = iso::find(&self.code)?;
        if currency.exponent != self.precision {
            return None;
        }

        let mut decimal = Decimal::from_f64(amount)?
            .round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        if decimal.is_zero() {
            // drop the sign of a rounded-away negative
            decimal = Decimal::ZERO;
        }
        // rusty_money only places three group separators
        if decimal.abs() >= Decimal::from(ISO_GROUPING_LIMIT) {
            return None;
        }
        decimal.rescale(self.precision);

        Some(Money::from_decimal(decimal, currency).to_string())
    }

    fn format_manual(&self, amount: f64) -> String {
        let symbol = FALLBACK_SYMBOLS
            .iter()
            .find(|(code, _)| *code == self.code)
            .map_or(GENERIC_SYMBOL, |(_, symbol)| *symbol);

        // f64::round is half away from zero
        let scale = 10f64.powi(self.precision as i32);
        let scaled = amount.abs() * scale;
        let rounded = if scaled.is_finite() {
            scaled.round() / scale
        } else {
            amount.abs()
        };

        let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
        let digits = format!("{:.*}", self.precision as usize, rounded);
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = format!("{sign}{symbol}{}", group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        CurrencyFormatter::new(DEFAULT_CURRENCY_CODE)
    }
}

/// Inserts `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats `amount` in `currency_code`.
///
/// ## Example
/// ```rust
/// use pricewise_core::format_currency;
///
/// assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
/// assert_eq!(format_currency(f64::NAN, "USD"), "—");
/// ```
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    CurrencyFormatter::new(currency_code).format(amount)
}

/// [`format_currency`] in the default currency.
pub fn format_usd(amount: f64) -> String {
    CurrencyFormatter::default().format(amount)
}

/// Formats a percentage with two decimals, e.g. `"6.67%"`.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{value:.2}%")
}

// =============================================================================
// Unit Tests
// =============================================================================
