//! The [`Size`] value type.

use core::cmp::Ordering;
use core::ops::Mul;
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::{SizeError, SizeResult};
use crate::locale::{Locale, PosixLocale};
use crate::parse;

/// Sign of a size, reported separately from a fixed-width magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Less than zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Greater than zero.
    Positive,
}

impl Sign {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Zero => 0,
            Self::Positive => 1,
        }
    }

    fn of(value: &BigInt) -> Self {
        match value.sign() {
            num_bigint::Sign::Minus => Self::Negative,
            num_bigint::Sign::NoSign => Self::Zero,
            num_bigint::Sign::Plus => Self::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.as_i32() * rhs.as_i32() {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Zero,
        }
    }
}

/// An exact, signed number of bytes of unbounded magnitude.
///
/// Values are always whole bytes: every constructor that accepts
/// fractional input truncates toward zero. Arithmetic never wraps and
/// never goes through floating point.
///
/// ```
/// use bytesize::{Sign, Size};
///
/// let size: Size = "1.5 MiB".parse()?;
/// assert_eq!(size.bytes()?, (1_572_864, Sign::Positive));
/// assert_eq!(size.to_string(), "1.5 MiB");
/// # Ok::<(), bytesize::SizeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size {
    pub(crate) bytes: BigInt,
}

impl Size {
    // ==================== Constructors ====================

    /// Zero bytes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Size from a magnitude and a sign.
    ///
    /// Only [`Sign::Negative`] changes the value; a non-zero magnitude with
    /// [`Sign::Zero`] is taken as positive.
    #[must_use]
    pub fn from_bytes(bytes: u64, sign: Sign) -> Self {
        let magnitude = BigInt::from(bytes);
        Self {
            bytes: if sign == Sign::Negative { -magnitude } else { magnitude },
        }
    }

    /// Parse a specification using the given locale's radix and unit names.
    pub fn parse_in(spec: &str, locale: &dyn Locale) -> SizeResult<Self> {
        parse::parse_size(spec, locale)
    }

    // ==================== Queries ====================

    /// Magnitude as `u64` plus the sign.
    ///
    /// Fails with [`SizeError::Overflow`] when the magnitude does not fit;
    /// [`Size::bytes_str`] always succeeds.
    pub fn bytes(&self) -> SizeResult<(u64, Sign)> {
        let magnitude = self
            .bytes
            .magnitude()
            .to_u64()
            .ok_or_else(|| SizeError::overflow("bytes", &self.bytes))?;
        Ok((magnitude, self.sign()))
    }

    /// Exact signed byte count in base 10.
    #[must_use]
    pub fn bytes_str(&self) -> String {
        self.bytes.to_string()
    }

    /// Sign of the value.
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::of(&self.bytes)
    }

    /// Whether this is zero bytes.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes.is_zero()
    }

    /// The underlying integer.
    #[must_use]
    pub const fn as_bigint(&self) -> &BigInt {
        &self.bytes
    }

    /// Consume the size, returning the underlying integer.
    #[must_use]
    pub fn into_bigint(self) -> BigInt {
        self.bytes
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            bytes: self.bytes.abs(),
        }
    }

    // ==================== Comparison ====================

    /// Three-way comparison, optionally of magnitudes only.
    #[must_use]
    pub fn compare(&self, other: &Self, abs: bool) -> Ordering {
        if abs {
            self.bytes.magnitude().cmp(other.bytes.magnitude())
        } else {
            self.bytes.cmp(&other.bytes)
        }
    }

    /// Three-way comparison against a plain byte count.
    #[must_use]
    pub fn compare_bytes(&self, bytes: u64, abs: bool) -> Ordering {
        let other = BigInt::from(bytes);
        if abs {
            self.bytes.abs().cmp(&other)
        } else {
            self.bytes.cmp(&other)
        }
    }
}

// ==================== Trait Implementations ====================

impl FromStr for Size {
    type Err = SizeError;

    /// Parse with the POSIX locale; see [`Size::parse_in`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_size(s, &PosixLocale)
    }
}

impl From<BigInt> for Size {
    fn from(bytes: BigInt) -> Self {
        Self { bytes }
    }
}

impl From<Size> for BigInt {
    fn from(size: Size) -> Self {
        size.bytes
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Size {
                fn from(bytes: $ty) -> Self {
                    Self { bytes: BigInt::from(bytes) }
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl TryFrom<&Size> for u64 {
    type Error = SizeError;

    fn try_from(size: &Size) -> Result<Self, Self::Error> {
        size.bytes
            .to_u64()
            .ok_or_else(|| SizeError::overflow("u64 conversion", &size.bytes))
    }
}

impl TryFrom<&Size> for i64 {
    type Error = SizeError;

    fn try_from(size: &Size) -> Result<Self, Self::Error> {
        size.bytes
            .to_i64()
            .ok_or_else(|| SizeError::overflow("i64 conversion", &size.bytes))
    }
}
