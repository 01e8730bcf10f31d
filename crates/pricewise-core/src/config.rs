//! Calculator configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable              | Default | Meaning                          |
//! |-----------------------|---------|----------------------------------|
//! | `PRICEWISE_CURRENCY`  | `USD`   | Display currency code            |
//! | `PRICEWISE_TAX_RATE`  | `8.5`   | Initial tax percentage           |
//! | `PRICEWISE_APPLY_TAX` | `false` | Whether tax starts switched on   |

use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

use crate::error::ConfigError;
use crate::validation::validate_tax_rate;
use crate::DEFAULT_CURRENCY_CODE;

/// Tax percentage the form starts with.
pub const DEFAULT_TAX_RATE: f64 = 8.5;

/// Calculator defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Currency code (ISO 4217), upper-cased.
    pub currency_code: String,

    /// Tax percentage, e.g. 8.5 = 8.5%
    pub tax_rate: f64,

    /// Whether tax is applied by default.
    pub apply_tax: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
            apply_tax: false,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CalculatorConfig::default();

        let currency_code = match lookup("PRICEWISE_CURRENCY") {
            Some(code) if !code.trim().is_empty() => code.trim().to_ascii_uppercase(),
            Some(_) => return Err(ConfigError::InvalidValue("PRICEWISE_CURRENCY".to_string())),
            None => defaults.currency_code,
        };

        let tax_rate = match lookup("PRICEWISE_TAX_RATE") {
            Some(raw) => {
                let rate: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PRICEWISE_TAX_RATE".to_string()))?;
                validate_tax_rate(rate)
                    .map_err(|_| ConfigError::InvalidValue("PRICEWISE_TAX_RATE".to_string()))?;
                rate
            }
            None => defaults.tax_rate,
        };

        let apply_tax = lookup("PRICEWISE_APPLY_TAX")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.apply_tax);

        let config = CalculatorConfig {
            currency_code,
            tax_rate,
            apply_tax,
        };
        debug!(?config, "calculator config loaded");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CalculatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.tax_rate, 8.5);
        assert!(!config.apply_tax);
    }

    #[test]
    fn test_overrides() {
        let config = CalculatorConfig::from_lookup(lookup(&[
            ("PRICEWISE_CURRENCY", " khr "),
            ("PRICEWISE_TAX_RATE", "10"),
            ("PRICEWISE_APPLY_TAX", "true"),
        ]))
        .unwrap();

        assert_eq!(config.currency_code, "KHR");
        assert_eq!(config.tax_rate, 10.0);
        assert!(config.apply_tax);
    }

    #[test]
    fn test_invalid_tax_rate() {
        for bad in ["abc", "-1", "NaN", "inf"] {
            let err = CalculatorConfig::from_lookup(lookup(&[("PRICEWISE_TAX_RATE", bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue("PRICEWISE_TAX_RATE".to_string())
            );
        }
    }

    #[test]
    fn test_blank_currency_rejected() {
        let err = CalculatorConfig::from_lookup(lookup(&[("PRICEWISE_CURRENCY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("PRICEWISE_CURRENCY".to_string()));
    }

    #[test]
    fn test_unparseable_apply_tax_falls_back() {
        let config =
            CalculatorConfig::from_lookup(lookup(&[("PRICEWISE_APPLY_TAX", "yes")])).unwrap();
        assert!(!config.apply_tax);
    }
}
