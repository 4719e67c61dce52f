//! Locale-aware size specification grammar.
//!
//! A specification is an optional sign, digits with an optional decimal
//! point, an optional exponent and an optional unit, with whitespace
//! allowed around the number and the unit:
//!
//! ```text
//!   "  -1.5e3 KiB "   "+2GB"   "0,5 M"   "1024"
//! ```
//!
//! Both `.` and the locale's radix are accepted as the decimal point. The
//! unit token is matched case-insensitively as a prefix of a unit name, so
//! `k`, `ki` and `KIB` all mean KiB while `kb` means KB.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use regex::{Captures, Regex};

use crate::decimal;
use crate::error::{SizeError, SizeResult};
use crate::locale::Locale;
use crate::size::Size;
use crate::unit::{BinaryUnit, DecimalUnit, Unit};

/// Largest accepted exponent magnitude in `1e<exp>` notation.
pub const MAX_EXPONENT: i64 = 100_000;

const NUMBER: &str =
    r"(?P<numeric>(?P<sign>[-+])?(?P<int>[0-9]*)(?:\.(?P<frac>[0-9]*))?(?:[eE](?P<exp>[-+]?[0-9]+))?)";

static SIZE_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*{NUMBER}\s*(?P<unit>.*?)\s*$")).unwrap());

static DECIMAL_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*{NUMBER}\s*$")).unwrap());

/// Parse a size specification such as `"1.5 GiB"`.
pub fn parse_size(spec: &str, locale: &dyn Locale) -> SizeResult<Size> {
    let normalized = normalize_radix(spec, locale)?;
    let captures = SIZE_SPEC
        .captures(&normalized)
        .ok_or_else(|| SizeError::invalid_spec(spec, "not a number followed by an optional unit"))?;

    let mut value = numeric_value(spec, &captures)?;
    let unit_token = captures.name("unit").map_or("", |m| m.as_str()).trim();
    if !unit_token.is_empty() {
        let unit = resolve_unit(unit_token, locale).ok_or_else(|| {
            tracing::debug!(input = spec, unit = unit_token, "unknown unit in size specification");
            SizeError::invalid_spec(spec, format!("unknown unit '{unit_token}'"))
        })?;
        value = &value * &decimal::from_bigint(&unit.multiplier());
    }

    let size = Size::from(decimal::trunc(&value));
    tracing::trace!(input = spec, bytes = %size.bytes_str(), "parsed size specification");
    Ok(size)
}

/// Parse a plain decimal number such as `"1.51"` or `"-2e-3"`.
///
/// Uses the numeric part of the size grammar with no unit allowed.
pub fn parse_decimal(text: &str, locale: &dyn Locale) -> SizeResult<BigDecimal> {
    let normalized = normalize_radix(text, locale)?;
    let captures = DECIMAL_SPEC
        .captures(&normalized)
        .ok_or_else(|| SizeError::invalid_spec(text, "not a decimal number"))?;
    numeric_value(text, &captures)
}

/// Find the unit a free-form token refers to.
///
/// Lookup order: canonical binary names, canonical decimal names, translated
/// binary names, translated decimal names. The first unit whose name starts
/// with the token, ignoring case, wins.
pub fn resolve_unit(token: &str, locale: &dyn Locale) -> Option<Unit> {
    let token = token.to_lowercase();
    let matches = |name: &str| name.to_lowercase().starts_with(&token);

    let canonical_binary = BinaryUnit::ALL
        .into_iter()
        .find(|unit| matches(unit.name()))
        .map(Unit::Binary);
    let canonical_decimal = || {
        DecimalUnit::ALL
            .into_iter()
            .find(|unit| matches(unit.name()))
            .map(Unit::Decimal)
    };
    let translated_binary = || {
        BinaryUnit::ALL
            .into_iter()
            .find(|unit| locale.translate_unit(unit.name()).is_some_and(matches))
            .map(Unit::Binary)
    };
    let translated_decimal = || {
        DecimalUnit::ALL
            .into_iter()
            .find(|unit| locale.translate_unit(unit.name()).is_some_and(matches))
            .map(Unit::Decimal)
    };

    canonical_binary
        .or_else(canonical_decimal)
        .or_else(translated_binary)
        .or_else(translated_decimal)
}

/// Rewrite the locale radix to `.` so one grammar serves every locale.
fn normalize_radix(input: &str, locale: &dyn Locale) -> SizeResult<String> {
    let radix = locale.radix();
    let mut normalized = String::new();
    normalized.try_reserve(input.len())?;
    if radix == "." {
        normalized.push_str(input);
    } else {
        let mut rest = input;
        while let Some(at) = rest.find(radix) {
            normalized.push_str(&rest[..at]);
            normalized.push('.');
            rest = &rest[at + radix.len()..];
        }
        normalized.push_str(rest);
    }
    Ok(normalized)
}

/// Build the exact decimal value of the `numeric` capture group.
fn numeric_value(input: &str, captures: &Captures<'_>) -> SizeResult<BigDecimal> {
    let group = |name| captures.name(name).map_or("", |m| m.as_str());
    let int_digits = group("int");
    let frac_digits = group("frac");
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(SizeError::invalid_spec(input, "missing digits"));
    }

    let exponent = match captures.name("exp") {
        Some(exp) => exp
            .as_str()
            .parse::<i64>()
            .ok()
            .filter(|exp| exp.abs() <= MAX_EXPONENT)
            .ok_or_else(|| SizeError::invalid_spec(input, "exponent out of range"))?,
        None => 0,
    };

    let digits: BigInt = format!("{int_digits}{frac_digits}")
        .parse()
        .map_err(|_| SizeError::invalid_spec(input, "malformed digits"))?;
    let digits = if group("sign") == "-" { -digits } else { digits };
    let scale = frac_digits.len() as i64 - exponent;
    Ok(BigDecimal::new(digits, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{FixedLocale, PosixLocale};
    use crate::size::Sign;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn bytes(spec: &str) -> String {
        parse_size(spec, &PosixLocale).unwrap().bytes_str()
    }

    #[rstest]
    #[case("0", "0")]
    #[case("0 B", "0")]
    #[case("1024", "1024")]
    #[case("1 KiB", "1024")]
    #[case("1KB", "1000")]
    #[case("1 MiB", "1048576")]
    #[case("   1 MiB", "1048576")]
    #[case("1 MiB    ", "1048576")]
    #[case("    1 MiB   ", "1048576")]
    #[case("1.5 MiB", "1572864")]
    #[case("-1.5 GiB", "-1610612736")]
    #[case("+1.5 GiB", "1610612736")]
    #[case("1e-1 KB", "100")]
    #[case("-1e-1 KB", "-100")]
    #[case("1E3", "1000")]
    #[case(".5 KiB", "512")]
    #[case("2. KiB", "2048")]
    #[case("1.9", "1")]
    #[case("-1.9", "-1")]
    fn parses_specifications(#[case] spec: &str, #[case] expected: &str) {
        assert_eq!(bytes(spec), expected);
    }

    #[rstest]
    #[case("1 k", "1024")]
    #[case("1 kib", "1024")]
    #[case("1 KIB", "1024")]
    #[case("1 kb", "1000")]
    #[case("1 m", "1048576")]
    #[case("1 b", "1")]
    #[case("1 Ki", "1024")]
    #[case("1e", "1152921504606846976")]
    fn unit_tokens_are_case_insensitive_prefixes(#[case] spec: &str, #[case] expected: &str) {
        assert_eq!(bytes(spec), expected);
    }

    #[test]
    fn largest_units_do_not_overflow() {
        assert_eq!(bytes("1 YiB"), "1208925819614629174706176");
        assert_eq!(bytes("1 YB"), "1000000000000000000000000");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("KiB")]
    #[case("1 XiB")]
    #[case("1 KiBytes")]
    #[case("1.2.3 KiB")]
    #[case("--1")]
    #[case("1 2")]
    #[case(".")]
    #[case("1e999999999")]
    fn rejects_malformed_input(#[case] spec: &str) {
        let err = parse_size(spec, &PosixLocale).unwrap_err();
        assert!(matches!(err, SizeError::InvalidSpec { .. }), "{spec:?}: {err:?}");
    }

    #[test]
    fn comma_locale_accepts_both_separators() {
        let czech = FixedLocale::new(",");
        let parse = |spec| parse_size(spec, &czech).unwrap().bytes().unwrap();
        assert_eq!(parse("1,5 KiB"), (1536, Sign::Positive));
        assert_eq!(parse("-1,5 KiB"), (1536, Sign::Negative));
        assert_eq!(parse("1.5 KiB"), (1536, Sign::Positive));
        assert_eq!(parse("-1.5 KiB"), (1536, Sign::Negative));
        assert_eq!(parse("1e-1 KB"), (100, Sign::Positive));
    }

    #[test]
    fn multibyte_radix() {
        let pashto = FixedLocale::new("\u{066b}");
        let parse = |spec| parse_size(spec, &pashto).unwrap().bytes().unwrap();
        assert_eq!(parse("1\u{066b}5 KiB"), (1536, Sign::Positive));
        assert_eq!(parse("-1\u{066b}5 KiB"), (1536, Sign::Negative));
        assert_eq!(parse("1.5 KiB"), (1536, Sign::Positive));
    }

    #[test]
    fn translated_unit_names_are_consulted_last() {
        let french = FixedLocale::new(",")
            .with_unit_name("KiB", "Kio")
            .with_unit_name("MB", "Mo");
        let parse = |spec| parse_size(spec, &french).unwrap().bytes_str();
        assert_eq!(parse("2 Kio"), "2048");
        assert_eq!(parse("1 mo"), "1000000");
        // canonical names keep priority over the catalog
        assert_eq!(parse("1 M"), "1048576");
    }

    #[test]
    fn decimal_grammar_rejects_units() {
        assert_eq!(
            parse_decimal("1.51", &PosixLocale).unwrap(),
            BigDecimal::new(BigInt::from(151), 2)
        );
        assert!(parse_decimal("1.51 KiB", &PosixLocale).is_err());
        assert!(parse_decimal("abc", &PosixLocale).is_err());
    }
}
