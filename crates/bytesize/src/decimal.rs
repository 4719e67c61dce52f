//! High-precision decimal helpers on top of [`BigDecimal`].
//!
//! Fractional intermediate values (parsed specifications, factors, unit
//! conversions, true division) live in `BigDecimal` and are never routed
//! through machine floats. Multiplication is exact; division is carried out
//! to [`WORKING_PRECISION_DIGITS`] significant digits.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Working precision of inexact results, in bits of mantissa.
pub const WORKING_PRECISION_BITS: u32 = 256;

/// [`WORKING_PRECISION_BITS`] expressed in significant decimal digits
/// (`floor(256 · log10(2))`).
pub const WORKING_PRECISION_DIGITS: u64 = 77;

/// `10^exp` as a big integer.
pub(crate) fn ten_to(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp as usize)
}

/// Lift an integer into the decimal domain without changing its value.
pub fn from_bigint(value: &BigInt) -> BigDecimal {
    BigDecimal::new(value.clone(), 0)
}

/// `numerator / denominator` rounded to the working precision.
///
/// The caller guarantees a non-zero denominator.
pub fn div(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    debug_assert!(!denominator.is_zero());
    (numerator / denominator).with_prec(WORKING_PRECISION_DIGITS)
}

/// Drop the fractional part, rounding toward zero.
pub fn trunc(value: &BigDecimal) -> BigInt {
    let (digits, scale) = value.as_bigint_and_exponent();
    if scale <= 0 {
        digits * ten_to(scale.unsigned_abs())
    } else {
        // BigInt division truncates toward zero.
        digits / ten_to(scale.unsigned_abs())
    }
}

/// Round to `places` digits after the point, ties away from zero.
pub fn round_half_up(value: &BigDecimal, places: u32) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    let places = i64::from(places);
    if scale <= places {
        return value.clone();
    }

    let divisor = ten_to((scale - places).unsigned_abs());
    let (mut quotient, remainder) = digits.abs().div_rem(&divisor);
    if remainder * 2u8 >= divisor {
        quotient += 1u8;
    }
    if digits.is_negative() {
        quotient = -quotient;
    }
    BigDecimal::new(quotient, places)
}

/// Plain positional rendering with `radix` as the decimal separator.
///
/// Never switches to exponent notation. Trailing fractional zeros and a
/// dangling separator are removed, so `1.500` renders as `1.5` and `2.0`
/// as `2`. Zero is always rendered unsigned.
pub fn to_plain_string(value: &BigDecimal, radix: &str) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits.is_zero() {
        return "0".to_string();
    }

    let negative = digits.sign() == Sign::Minus;
    let magnitude = digits.abs();
    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if scale <= 0 {
        out.push_str(&(magnitude * ten_to(scale.unsigned_abs())).to_string());
        return out;
    }

    let scale = scale.unsigned_abs() as usize;
    let text = magnitude.to_string();
    let (int_part, frac_part) = if text.len() > scale {
        let (int_part, frac_part) = text.split_at(text.len() - scale);
        (int_part.to_string(), frac_part.to_string())
    } else {
        ("0".to_string(), format!("{text:0>scale$}"))
    };

    out.push_str(&int_part);
    let frac_part = frac_part.trim_end_matches('0');
    if !frac_part.is_empty() {
        out.push_str(radix);
        out.push_str(frac_part);
    }
    out
}

/// Render with exactly `places` fractional digits, rounding half away from
/// zero and padding with zeros.
pub fn to_fixed_string(value: &BigDecimal, places: u32, radix: &str) -> String {
    let rounded = round_half_up(value, places);
    let (digits, scale) = rounded.as_bigint_and_exponent();
    // Rescale to exactly `places`; `scale <= places` after rounding.
    let shift = (i64::from(places) - scale).unsigned_abs();
    let scaled = digits * ten_to(shift);

    let mut out = String::new();
    if scaled.is_negative() {
        out.push('-');
    }
    let text = scaled.abs().to_string();
    let places = places as usize;
    if places == 0 {
        out.push_str(&text);
        return out;
    }

    let text = format!("{text:0>width$}", width = places + 1);
    let (int_part, frac_part) = text.split_at(text.len() - places);
    out.push_str(int_part);
    out.push_str(radix);
    out.push_str(frac_part);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dec(digits: i64, scale: i64) -> BigDecimal {
        BigDecimal::new(BigInt::from(digits), scale)
    }

    #[rstest]
    #[case(dec(15, 1), 1)]
    #[case(dec(-15, 1), -1)]
    #[case(dec(1999, 3), 1)]
    #[case(dec(-1999, 3), -1)]
    #[case(dec(12, -2), 1200)]
    #[case(dec(5, 3), 0)]
    fn trunc_rounds_toward_zero(#[case] value: BigDecimal, #[case] expected: i64) {
        assert_eq!(trunc(&value), BigInt::from(expected));
    }

    #[rstest]
    #[case(dec(9_765_625, 7), 2, "0.98")]
    #[case(dec(125, 3), 2, "0.13")]
    #[case(dec(-125, 3), 2, "-0.13")]
    #[case(dec(124, 3), 2, "0.12")]
    #[case(dec(15, 1), 0, "2")]
    #[case(dec(15, 1), 3, "1.5")]
    fn half_up_rounding(#[case] value: BigDecimal, #[case] places: u32, #[case] expected: &str) {
        assert_eq!(to_plain_string(&round_half_up(&value, places), "."), expected);
    }

    #[rstest]
    #[case(dec(0, 5), ".", "0")]
    #[case(dec(1500, 3), ".", "1.5")]
    #[case(dec(2000, 3), ".", "2")]
    #[case(dec(-5, 4), ".", "-0.0005")]
    #[case(dec(42, -3), ".", "42000")]
    #[case(dec(15, 1), ",", "1,5")]
    fn plain_rendering(#[case] value: BigDecimal, #[case] radix: &str, #[case] expected: &str) {
        assert_eq!(to_plain_string(&value, radix), expected);
    }

    #[rstest]
    #[case(dec(15, 1), 2, "1.50")]
    #[case(dec(1, 0), 2, "1.00")]
    #[case(dec(-5, 3), 2, "-0.01")]
    #[case(dec(4, 3), 2, "0.00")]
    #[case(dec(12345, 2), 0, "123")]
    fn fixed_rendering(#[case] value: BigDecimal, #[case] places: u32, #[case] expected: &str) {
        assert_eq!(to_fixed_string(&value, places, "."), expected);
    }

    #[test]
    fn division_is_bounded_by_working_precision() {
        let third = div(&dec(1, 0), &dec(3, 0));
        let rendered = to_plain_string(&third, ".");
        assert_eq!(rendered.len(), 2 + WORKING_PRECISION_DIGITS as usize);
        assert!(rendered.starts_with("0.3333"));
    }

    #[test]
    fn exact_division_stays_exact() {
        let value = div(&dec(1000, 0), &dec(1024, 0));
        assert_eq!(to_plain_string(&value, "."), "0.9765625");
    }
}
