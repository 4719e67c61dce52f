//! Rendering sizes as text.

use core::fmt::{self, Write as _};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Signed;

use crate::decimal;
use crate::locale::{Locale, PosixLocale};
use crate::size::Size;
use crate::unit::{BinaryUnit, Unit};

/// Default number of decimal places used by `Display`.
pub const DEFAULT_PLACES: u32 = 2;

impl Size {
    /// Value expressed in `unit`, e.g. `"1.5"` for 1536 B in KiB.
    ///
    /// Always uses `.` as the decimal separator and never exponent
    /// notation, so the result can be parsed back in any locale.
    #[must_use]
    pub fn convert_to(&self, unit: Unit) -> String {
        let value = decimal::div(
            &decimal::from_bigint(&self.bytes),
            &decimal::from_bigint(&unit.multiplier()),
        );
        decimal::to_plain_string(&value, ".")
    }

    /// Human-readable rendering in the POSIX locale, e.g. `"1.5 GiB"`.
    ///
    /// See [`Size::human_readable_in`].
    #[must_use]
    pub fn human_readable(&self, min_unit: BinaryUnit, max_places: Option<u32>, translate: bool) -> String {
        self.human_readable_in(min_unit, max_places, translate, &PosixLocale)
    }

    /// Human-readable rendering with the largest binary unit that keeps the
    /// number below 1024, starting no smaller than `min_unit`.
    ///
    /// `max_places` caps the digits after the separator (rounded half away
    /// from zero); `None` keeps every digit. Trailing zeros are dropped, so
    /// `"100.00 GiB"` renders as `"100 GiB"`. With `translate`, the unit
    /// abbreviation comes from the locale's catalog when it has one.
    #[must_use]
    pub fn human_readable_in(
        &self,
        min_unit: BinaryUnit,
        max_places: Option<u32>,
        translate: bool,
        locale: &dyn Locale,
    ) -> String {
        let kibi_reciprocal = BigDecimal::new(BigInt::from(9_765_625u32), 10);
        let mut value = &decimal::from_bigint(&self.bytes.abs()) * &reciprocal(min_unit);
        let mut unit = min_unit;
        let limit = decimal::from_bigint(&BigInt::from(1024u16));
        while value >= limit {
            let Some(next) = unit.next() else { break };
            value = &value * &kibi_reciprocal;
            unit = next;
        }

        if self.bytes.is_negative() {
            value = -value;
        }
        if let Some(places) = max_places {
            value = decimal::round_half_up(&value, places);
        }

        let number = decimal::to_plain_string(&value, locale.radix());
        let name = if translate {
            locale.translate_unit(unit.name()).unwrap_or(unit.name())
        } else {
            unit.name()
        };
        format!("{number} {name}")
    }
}

/// Exact `1 / 1024^k` for the unit's exponent `k`.
///
/// `2^-n = 5^n / 10^n`, so every binary reciprocal terminates.
fn reciprocal(unit: BinaryUnit) -> BigDecimal {
    let bits = 10 * unit.exponent();
    BigDecimal::new(BigInt::from(5u8).pow(bits), i64::from(bits))
}

/// Human-readable form in the POSIX locale.
///
/// Uses [`DEFAULT_PLACES`] decimal places unless a precision is given, so
/// `format!("{size:.0}")` rounds to whole units.
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f
            .precision()
            .map_or(DEFAULT_PLACES, |p| u32::try_from(p).unwrap_or(u32::MAX));
        let text = self.human_readable(BinaryUnit::B, Some(places), false);
        // Precision means places here, so `pad` (which truncates) is not used.
        let missing = f.width().unwrap_or(0).saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (missing, 0),
            Some(fmt::Alignment::Center) => (missing / 2, missing - missing / 2),
            Some(fmt::Alignment::Left) | None => (0, missing),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}
