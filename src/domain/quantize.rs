//! Exact decimal-shift arithmetic for order normalization.
//!
//! Injective spot orders are submitted in chain units: the human-readable
//! quantity is shifted by `baseDecimals + (baseDecimals - quoteDecimals)`
//! before order construction. That exponent is part of the downstream
//! order-construction contract and is reproduced here verbatim; do not
//! "correct" it to a plain `baseDecimals` shift without revalidating the
//! chain unit convention.
//!
//! Shifts operate on the digit string itself, never through floating
//! point, so results stay exact for any precision the chain can express
//! (the exponent reaches ±36 for extreme decimal configurations, beyond
//! the range of fixed-width decimal types).

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest absolute power-of-ten shift accepted by [`shift_decimal`].
pub const MAX_SHIFT: i32 = 256;

/// Errors produced by the normalization arithmetic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantizeError {
    /// The input was not a plain decimal literal.
    #[error("invalid decimal literal: {0:?}")]
    InvalidDecimal(String),
    /// The requested shift exceeds [`MAX_SHIFT`].
    #[error("decimal shift {0} out of range")]
    ShiftOutOfRange(i32),
    /// A tick size was zero, negative, or unparseable.
    #[error("tick size must be a positive decimal: {0:?}")]
    InvalidTick(String),
}

/// Exponent applied to a human-readable quantity before order construction.
///
/// Computes `base + (base - quote)` in signed arithmetic; the result is
/// negative whenever the quote asset carries more precision than twice the
/// base precision covers.
pub fn order_quantity_exponent(base_decimals: u32, quote_decimals: u32) -> i32 {
    let base = i64::from(base_decimals);
    let quote = i64::from(quote_decimals);
    let exponent = (base + (base - quote))
        .clamp(i64::from(-MAX_SHIFT - 1), i64::from(MAX_SHIFT + 1));
    i32::try_from(exponent).unwrap_or(MAX_SHIFT + 1)
}

/// Shift the decimal point of `value` by `exponent` places, exactly.
///
/// Accepts plain decimal literals (optional sign, optional fraction) and
/// returns plain notation with no leading or trailing zero padding.
/// Exponential notation is rejected; the output feeds chain messages that
/// expect plain digit strings.
pub fn shift_decimal(value: &str, exponent: i32) -> Result<String, QuantizeError> {
    if exponent.abs() > MAX_SHIFT {
        return Err(QuantizeError::ShiftOutOfRange(exponent));
    }

    let trimmed = value.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (body, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(QuantizeError::InvalidDecimal(value.to_string()));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(QuantizeError::InvalidDecimal(value.to_string()));
    }

    let digits = format!("{int_part}{frac_part}");
    if digits.bytes().all(|b| b == b'0') {
        return Ok("0".to_string());
    }

    // New decimal point position, counted from the left edge of `digits`.
    let point = int_part.len() as i64 + i64::from(exponent);
    let len = digits.len() as i64;

    let unsigned = if point <= 0 {
        let pad = "0".repeat(usize::try_from(-point).unwrap_or(0));
        trim_zeros(&format!("0.{pad}{digits}"))
    } else if point >= len {
        let pad = "0".repeat(usize::try_from(point - len).unwrap_or(0));
        trim_zeros(&format!("{digits}{pad}"))
    } else {
        let (head, tail) = digits.split_at(usize::try_from(point).unwrap_or(0));
        trim_zeros(&format!("{head}.{tail}"))
    };

    if negative {
        Ok(format!("-{unsigned}"))
    } else {
        Ok(unsigned)
    }
}

/// Quantity sent on-chain for a human-readable order quantity.
///
/// `quantity × 10^(base + (base - quote))`, computed as an exact shift.
pub fn adjusted_order_quantity(
    quantity: &str,
    base_decimals: u32,
    quote_decimals: u32,
) -> Result<String, QuantizeError> {
    shift_decimal(
        quantity,
        order_quantity_exponent(base_decimals, quote_decimals),
    )
}

/// Power-of-ten exponent of the least significant digit of a tick size.
///
/// `"0.001"` → `-3`, `"1000"` → `3`, `"1"` → `0`. Markets annotate their
/// price and quantity ticks with this multiplier so order construction can
/// snap values to the tick grid without re-parsing the tick itself.
pub fn tens_multiplier(value: &str) -> Result<i32, QuantizeError> {
    let parsed: Decimal = value
        .trim()
        .parse()
        .map_err(|_| QuantizeError::InvalidTick(value.to_string()))?;
    if parsed <= Decimal::ZERO {
        return Err(QuantizeError::InvalidTick(value.to_string()));
    }

    let normalized = parsed.normalize();
    let scale = normalized.scale();
    if scale > 0 {
        return Ok(-i32::try_from(scale).unwrap_or(i32::MAX));
    }

    let mut mantissa = normalized.mantissa().unsigned_abs();
    let mut exponent = 0i32;
    while mantissa % 10 == 0 {
        mantissa /= 10;
        exponent += 1;
    }
    Ok(exponent)
}

/// Truncate `value` to the tick grid implied by a tens multiplier.
///
/// Truncation (not rounding) keeps a snapped order inside the caller's
/// requested bounds.
pub fn round_to_tens(value: &str, tens: i32) -> Result<String, QuantizeError> {
    if !(-28..=28).contains(&tens) {
        return Err(QuantizeError::ShiftOutOfRange(tens));
    }
    let parsed: Decimal = value
        .trim()
        .parse()
        .map_err(|_| QuantizeError::InvalidDecimal(value.to_string()))?;

    let snapped = if tens <= 0 {
        parsed.trunc_with_scale(tens.unsigned_abs())
    } else {
        let step = Decimal::from_i128_with_scale(10i128.pow(tens.unsigned_abs()), 0);
        (parsed / step).trunc() * step
    };
    Ok(snapped.normalize().to_string())
}

/// Strip leading integer zeros and trailing fraction zeros.
fn trim_zeros(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (raw, ""),
    };
    let int_trimmed = int_part.trim_start_matches('0');
    let int_out = if int_trimmed.is_empty() { "0" } else { int_trimmed };
    let frac_trimmed = frac_part.trim_end_matches('0');
    if frac_trimmed.is_empty() {
        int_out.to_string()
    } else {
        format!("{int_out}.{frac_trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_is_base_plus_base_minus_quote() {
        assert_eq!(order_quantity_exponent(6, 6), 6);
        assert_eq!(order_quantity_exponent(18, 6), 30);
        assert_eq!(order_quantity_exponent(0, 0), 0);
    }

    #[test]
    fn exponent_goes_negative_for_high_precision_quotes() {
        // 6 + (6 - 18) = -6; the negative result is intentional.
        assert_eq!(order_quantity_exponent(6, 18), -6);
    }

    #[test]
    fn shift_left_pads_fraction() {
        assert_eq!(shift_decimal("1", -6).unwrap(), "0.000001");
        assert_eq!(shift_decimal("0.5", -6).unwrap(), "0.0000005");
    }

    #[test]
    fn shift_right_pads_integer() {
        assert_eq!(
            shift_decimal("1", 30).unwrap(),
            "1000000000000000000000000000000"
        );
        assert_eq!(shift_decimal("123.456", 3).unwrap(), "123456");
    }

    #[test]
    fn shift_moves_point_within_digits() {
        assert_eq!(shift_decimal("123.456", -2).unwrap(), "1.23456");
        assert_eq!(shift_decimal("0.000001", 6).unwrap(), "1");
    }

    #[test]
    fn shift_normalizes_zeros_and_sign() {
        assert_eq!(shift_decimal("1.230", 0).unwrap(), "1.23");
        assert_eq!(shift_decimal("0012", 1).unwrap(), "120");
        assert_eq!(shift_decimal("-2.5", 1).unwrap(), "-25");
        assert_eq!(shift_decimal("0", 12).unwrap(), "0");
        assert_eq!(shift_decimal("-0.000", 5).unwrap(), "0");
    }

    #[test]
    fn shift_preserves_every_significant_digit() {
        let long = "123456789.123456789123456789";
        assert_eq!(
            shift_decimal(long, -9).unwrap(),
            "0.123456789123456789123456789"
        );
        assert_eq!(
            shift_decimal(long, 18).unwrap(),
            "123456789123456789123456789"
        );
    }

    #[test]
    fn shift_rejects_non_decimal_input() {
        assert!(shift_decimal("1e5", 0).is_err());
        assert!(shift_decimal("", 2).is_err());
        assert!(shift_decimal(".", 2).is_err());
        assert!(shift_decimal("12,5", 1).is_err());
        assert!(shift_decimal("1", MAX_SHIFT + 1).is_err());
    }

    #[test]
    fn adjusted_quantity_reproduces_documented_example() {
        // base 6, quote 18, quantity "1": 1 × 10^(6 + (6 - 18)) = 10^-6.
        assert_eq!(adjusted_order_quantity("1", 6, 18).unwrap(), "0.000001");
    }

    #[test]
    fn adjusted_quantity_large_base() {
        assert_eq!(
            adjusted_order_quantity("2.5", 18, 6).unwrap(),
            "2500000000000000000000000000000"
        );
    }

    #[test]
    fn tens_multiplier_of_common_ticks() {
        assert_eq!(tens_multiplier("0.001").unwrap(), -3);
        assert_eq!(tens_multiplier("0.010").unwrap(), -2);
        assert_eq!(tens_multiplier("1000").unwrap(), 3);
        assert_eq!(tens_multiplier("1").unwrap(), 0);
        assert_eq!(tens_multiplier("25").unwrap(), 0);
        assert_eq!(tens_multiplier("0.000000000000001").unwrap(), -15);
    }

    #[test]
    fn tens_multiplier_rejects_non_positive() {
        assert!(tens_multiplier("0").is_err());
        assert!(tens_multiplier("-1").is_err());
        assert!(tens_multiplier("abc").is_err());
    }

    #[test]
    fn round_to_tens_truncates_to_grid() {
        assert_eq!(round_to_tens("1.23456", -2).unwrap(), "1.23");
        assert_eq!(round_to_tens("1.239", -2).unwrap(), "1.23");
        assert_eq!(round_to_tens("1234", 2).unwrap(), "1200");
        assert_eq!(round_to_tens("1.9", 0).unwrap(), "1");
        assert_eq!(round_to_tens("5", 0).unwrap(), "5");
    }
}
