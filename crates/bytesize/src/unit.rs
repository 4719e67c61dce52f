//! Binary and decimal size units.
//!
//! Units only parameterize parsing, conversion and rounding; a [`Size`]
//! never remembers the unit it was written in.
//!
//! [`Size`]: crate::Size

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;

use crate::error::SizeError;

/// Powers of 1024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BinaryUnit {
    /// Bytes.
    #[default]
    B,
    /// 2^10 bytes.
    KiB,
    /// 2^20 bytes.
    MiB,
    /// 2^30 bytes.
    GiB,
    /// 2^40 bytes.
    TiB,
    /// 2^50 bytes.
    PiB,
    /// 2^60 bytes.
    EiB,
    /// 2^70 bytes.
    ZiB,
    /// 2^80 bytes.
    YiB,
}

/// Powers of 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DecimalUnit {
    /// Bytes.
    #[default]
    B,
    /// 10^3 bytes.
    KB,
    /// 10^6 bytes.
    MB,
    /// 10^9 bytes.
    GB,
    /// 10^12 bytes.
    TB,
    /// 10^15 bytes.
    PB,
    /// 10^18 bytes.
    EB,
    /// 10^21 bytes.
    ZB,
    /// 10^24 bytes.
    YB,
}

impl BinaryUnit {
    /// All binary units, smallest first.
    pub const ALL: [Self; 9] = [
        Self::B,
        Self::KiB,
        Self::MiB,
        Self::GiB,
        Self::TiB,
        Self::PiB,
        Self::EiB,
        Self::ZiB,
        Self::YiB,
    ];

    /// Power of 1024 this unit stands for.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        self as u32
    }

    /// Canonical abbreviation, e.g. `"KiB"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KiB => "KiB",
            Self::MiB => "MiB",
            Self::GiB => "GiB",
            Self::TiB => "TiB",
            Self::PiB => "PiB",
            Self::EiB => "EiB",
            Self::ZiB => "ZiB",
            Self::YiB => "YiB",
        }
    }

    /// Next larger unit, `None` for [`BinaryUnit::YiB`].
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.exponent() as usize + 1).copied()
    }

    /// Number of bytes in one unit: `2^(10·k)`.
    #[must_use]
    pub fn multiplier(self) -> BigInt {
        BigInt::from(1u8) << (10 * self.exponent())
    }
}

impl DecimalUnit {
    /// All decimal units, smallest first.
    pub const ALL: [Self; 9] = [
        Self::B,
        Self::KB,
        Self::MB,
        Self::GB,
        Self::TB,
        Self::PB,
        Self::EB,
        Self::ZB,
        Self::YB,
    ];

    /// Power of 1000 this unit stands for.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        self as u32
    }

    /// Canonical abbreviation, e.g. `"KB"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
            Self::PB => "PB",
            Self::EB => "EB",
            Self::ZB => "ZB",
            Self::YB => "YB",
        }
    }

    /// Number of bytes in one unit: `1000^k`.
    #[must_use]
    pub fn multiplier(self) -> BigInt {
        BigInt::from(1000u16).pow(self.exponent())
    }
}

/// Either family of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A power of 1024.
    Binary(BinaryUnit),
    /// A power of 1000.
    Decimal(DecimalUnit),
}

impl Unit {
    /// Bytes, the unit both families share.
    pub const BYTES: Self = Self::Binary(BinaryUnit::B);

    /// Canonical abbreviation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary(unit) => unit.name(),
            Self::Decimal(unit) => unit.name(),
        }
    }

    /// Number of bytes in one unit.
    #[must_use]
    pub fn multiplier(self) -> BigInt {
        match self {
            Self::Binary(unit) => unit.multiplier(),
            Self::Decimal(unit) => unit.multiplier(),
        }
    }
}

impl From<BinaryUnit> for Unit {
    fn from(unit: BinaryUnit) -> Self {
        Self::Binary(unit)
    }
}

impl From<DecimalUnit> for Unit {
    fn from(unit: DecimalUnit) -> Self {
        Self::Decimal(unit)
    }
}

impl fmt::Display for BinaryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DecimalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinaryUnit {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| SizeError::invalid_spec(s, "not a binary unit"))
    }
}

impl FromStr for DecimalUnit {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| SizeError::invalid_spec(s, "not a decimal unit"))
    }
}

/// Exact, case-sensitive lookup of a canonical unit name.
///
/// `"B"` resolves to the binary family. Free-form, case-insensitive input
/// belongs to the size parser, not here.
impl FromStr for Unit {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryUnit::from_str(s)
            .map(Self::Binary)
            .or_else(|_| DecimalUnit::from_str(s).map(Self::Decimal))
            .map_err(|_| SizeError::invalid_spec(s, "unknown unit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(BinaryUnit::B, 1)]
    #[case(BinaryUnit::KiB, 1024)]
    #[case(BinaryUnit::MiB, 1_048_576)]
    #[case(BinaryUnit::GiB, 1_073_741_824)]
    #[case(BinaryUnit::EiB, 1_152_921_504_606_846_976)]
    fn binary_multipliers(#[case] unit: BinaryUnit, #[case] bytes: u64) {
        assert_eq!(unit.multiplier(), BigInt::from(bytes));
    }

    #[rstest]
    #[case(DecimalUnit::B, 1)]
    #[case(DecimalUnit::KB, 1_000)]
    #[case(DecimalUnit::MB, 1_000_000)]
    #[case(DecimalUnit::EB, 1_000_000_000_000_000_000)]
    fn decimal_multipliers(#[case] unit: DecimalUnit, #[case] bytes: u64) {
        assert_eq!(unit.multiplier(), BigInt::from(bytes));
    }

    #[test]
    fn largest_units_exceed_u64() {
        let yib: BigInt = BigInt::from(1u8) << 80;
        assert_eq!(BinaryUnit::YiB.multiplier(), yib);
        assert_eq!(
            DecimalUnit::YB.multiplier().to_string(),
            "1000000000000000000000000"
        );
    }

    #[test]
    fn next_walks_the_binary_ladder() {
        assert_eq!(BinaryUnit::B.next(), Some(BinaryUnit::KiB));
        assert_eq!(BinaryUnit::ZiB.next(), Some(BinaryUnit::YiB));
        assert_eq!(BinaryUnit::YiB.next(), None);
    }

    #[rstest]
    #[case("B", Unit::Binary(BinaryUnit::B))]
    #[case("KiB", Unit::Binary(BinaryUnit::KiB))]
    #[case("YiB", Unit::Binary(BinaryUnit::YiB))]
    #[case("KB", Unit::Decimal(DecimalUnit::KB))]
    #[case("EB", Unit::Decimal(DecimalUnit::EB))]
    fn parses_canonical_names(#[case] name: &str, #[case] expected: Unit) {
        assert_eq!(name.parse::<Unit>().unwrap(), expected);
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn rejects_non_canonical_names() {
        assert!("kib".parse::<Unit>().is_err());
        assert!("XiB".parse::<Unit>().is_err());
        assert!("KiB".parse::<DecimalUnit>().is_err());
    }
}
