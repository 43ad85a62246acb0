//! Property Tests - Normalization Arithmetic Exactness
//!
//! Verifies that the order quantity shift is an exact decimal-point move:
//! no digit is ever rounded away, for any decimal configuration a market
//! can carry, at well beyond 18 significant digits.

use proptest::prelude::*;

use injective_spot_console::domain::quantize::{
    adjusted_order_quantity, order_quantity_exponent, shift_decimal,
};

/// Significant digit sequence of a decimal string: every digit, with
/// leading and trailing zeros stripped. An exact shift may move the
/// point and pad zeros, but must never change this sequence.
fn significant_digits(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits
        .trim_start_matches('0')
        .trim_end_matches('0')
        .to_string()
}

proptest! {
    #[test]
    fn exponent_matches_documented_formula(
        base in 0u32..=24,
        quote in 0u32..=24,
    ) {
        let expected = i64::from(base) + (i64::from(base) - i64::from(quote));
        prop_assert_eq!(
            i64::from(order_quantity_exponent(base, quote)),
            expected
        );
    }

    #[test]
    fn shift_preserves_significant_digits(
        quantity in "[1-9][0-9]{0,17}(\\.[0-9]{1,18})?",
        base in 0u32..=24,
        quote in 0u32..=24,
    ) {
        let adjusted = adjusted_order_quantity(&quantity, base, quote).unwrap();
        prop_assert_eq!(
            significant_digits(&adjusted),
            significant_digits(&quantity)
        );
    }

    #[test]
    fn shift_round_trips_exactly(
        quantity in "[1-9][0-9]{0,17}(\\.[0-9]{1,18})?",
        base in 0u32..=24,
        quote in 0u32..=24,
    ) {
        let exponent = order_quantity_exponent(base, quote);
        let adjusted = adjusted_order_quantity(&quantity, base, quote).unwrap();
        let back = shift_decimal(&adjusted, -exponent).unwrap();
        // The inverse shift lands on the normalized form of the input.
        prop_assert_eq!(back, shift_decimal(&quantity, 0).unwrap());
    }

    #[test]
    fn eighteen_significant_digits_survive_any_market(
        base in 0u32..=24,
        quote in 0u32..=24,
    ) {
        let quantity = "123456789.123456789";
        let adjusted = adjusted_order_quantity(quantity, base, quote).unwrap();
        let digits = significant_digits(&adjusted);
        prop_assert_eq!(digits.as_str(), "123456789123456789");
        prop_assert_eq!(digits.len(), 18);
    }
}
