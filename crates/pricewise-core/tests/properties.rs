//! Property tests for the discount engine.
//!
//! Run with `RUST_LOG=pricewise_core=debug` to see why inputs are rejected.

use std::sync::Once;

use pricewise_core::{calculate_discount, format_currency, DiscountKind};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn tolerance(scale: f64) -> f64 {
    1e-9 * scale.abs().max(1.0)
}

fn any_kind() -> impl Strategy<Value = DiscountKind> {
    prop_oneof![Just(DiscountKind::Percentage), Just(DiscountKind::Fixed)]
}

proptest! {
    #[test]
    fn prop_percentage_price_after_discount(
        unit_price in 0.01f64..10_000.0,
        quantity in 1i64..=1_000,
        percent in 0.0f64..=100.0,
        tax_rate in 0.0f64..50.0,
    ) {
        init_tracing();
        let result = calculate_discount(unit_price, DiscountKind::Percentage, percent, quantity, tax_rate, false)
            .expect("valid percentage input");

        let expected = result.subtotal * (1.0 - percent / 100.0);
        prop_assert!((result.price_after_discount - expected).abs() <= tolerance(result.subtotal));
        prop_assert!((result.savings_percent - percent).abs() <= 1e-6);
    }

    #[test]
    fn prop_fixed_above_subtotal_rejected(
        unit_price in 0.01f64..1_000.0,
        quantity in 1i64..=100,
        excess in 0.01f64..1_000.0,
    ) {
        init_tracing();
        let subtotal = unit_price * quantity as f64;
        let result = calculate_discount(unit_price, DiscountKind::Fixed, subtotal + excess, quantity, 0.0, false);
        prop_assert!(result.is_err());
    }

    #[test]
    fn prop_percentage_above_hundred_rejected(
        unit_price in 0.01f64..1_000.0,
        quantity in 1i64..=100,
        percent in 100.0001f64..1_000.0,
    ) {
        init_tracing();
        let result = calculate_discount(unit_price, DiscountKind::Percentage, percent, quantity, 0.0, true);
        prop_assert!(result.is_err());
    }

    #[test]
    fn prop_non_positive_price_or_quantity_rejected(
        kind in any_kind(),
        bad_price in -1_000.0f64..=0.0,
        bad_quantity in -1_000i64..=0,
        good_price in 0.01f64..1_000.0,
        good_quantity in 1i64..=100,
    ) {
        init_tracing();
        prop_assert!(calculate_discount(bad_price, kind, 0.0, good_quantity, 0.0, false).is_err());
        prop_assert!(calculate_discount(good_price, kind, 0.0, bad_quantity, 0.0, false).is_err());
    }

    #[test]
    fn prop_no_tax_means_total_equals_discounted_price(
        kind in any_kind(),
        unit_price in 0.01f64..1_000.0,
        quantity in 1i64..=100,
        fraction in 0.0f64..=1.0,
        tax_rate in 0.0f64..100.0,
    ) {
        init_tracing();
        let subtotal = unit_price * quantity as f64;
        let value = match kind {
            DiscountKind::Percentage => fraction * 100.0,
            DiscountKind::Fixed => fraction * subtotal,
        };

        let result = calculate_discount(unit_price, kind, value, quantity, tax_rate, false)
            .expect("valid input");
        prop_assert_eq!(result.tax_amount, 0.0);
        prop_assert_eq!(result.total_due, result.price_after_discount);
    }

    #[test]
    fn prop_compute_is_deterministic(
        kind in any_kind(),
        unit_price in 0.01f64..1_000.0,
        quantity in 1i64..=100,
        value in 0.0f64..=100.0,
        tax_rate in 0.0f64..30.0,
        apply_tax in any::<bool>(),
    ) {
        let first = calculate_discount(unit_price, kind, value, quantity, tax_rate, apply_tax);
        let second = calculate_discount(unit_price, kind, value, quantity, tax_rate, apply_tax);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_riel_never_shows_fraction(amount in -1e9f64..1e9) {
        let text = format_currency(amount, "KHR");
        prop_assert!(!text.contains('.'), "{}", text);
        prop_assert!(text.contains('៛'));
    }
}

#[test]
fn concrete_scenarios() {
    init_tracing();

    let no_tax = calculate_discount(100.0, DiscountKind::Percentage, 20.0, 1, 8.5, false).unwrap();
    assert_eq!(
        (no_tax.subtotal, no_tax.discount_amount, no_tax.price_after_discount),
        (100.0, 20.0, 80.0)
    );
    assert_eq!((no_tax.tax_amount, no_tax.total_due, no_tax.savings_percent), (0.0, 80.0, 20.0));

    let with_tax = calculate_discount(100.0, DiscountKind::Percentage, 20.0, 1, 8.5, true).unwrap();
    assert!((with_tax.tax_amount - 6.8).abs() < 1e-9);
    assert!((with_tax.total_due - 86.8).abs() < 1e-9);

    let fixed = calculate_discount(50.0, DiscountKind::Fixed, 10.0, 3, 0.0, false).unwrap();
    assert_eq!(fixed.subtotal, 150.0);
    assert_eq!(fixed.price_after_discount, 140.0);
    assert!((fixed.savings_percent - 6.667).abs() < 1e-3);

    assert!(calculate_discount(50.0, DiscountKind::Fixed, 200.0, 1, 0.0, false).is_err());

    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(1234.5, "KHR"), "៛1,235");
}
