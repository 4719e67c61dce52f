//! Arithmetic on [`Size`] values.
//!
//! Every binary operation comes in a pure form that returns a new value and
//! an in-place form that mutates the receiver and returns `&mut Size` so
//! calls can be chained. Both forms share one implementation. In-place
//! operations that can fail compute the result first and only then store
//! it, so an error leaves the receiver untouched.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use crate::decimal;
use crate::error::{SizeError, SizeResult};
use crate::locale::{Locale, PosixLocale};
use crate::parse;
use crate::size::{Sign, Size};
use crate::unit::Unit;

/// Direction used when rounding to a multiple of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundDir {
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
    /// To the nearest multiple, ties toward positive infinity.
    #[default]
    HalfUp,
}

#[allow(clippy::should_implement_trait)]
impl Size {
    // ==================== Addition & Subtraction ====================

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from(&self.bytes + &other.bytes)
    }

    /// `self + bytes`.
    #[must_use]
    pub fn add_bytes(&self, bytes: u64) -> Self {
        Self::from(&self.bytes + bytes)
    }

    /// `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::from(&self.bytes - &other.bytes)
    }

    /// `self - bytes`.
    #[must_use]
    pub fn sub_bytes(&self, bytes: u64) -> Self {
        Self::from(&self.bytes - bytes)
    }

    /// In-place [`Size::add`].
    pub fn grow(&mut self, other: &Self) -> &mut Self {
        self.bytes += &other.bytes;
        self
    }

    /// In-place [`Size::add_bytes`].
    pub fn grow_bytes(&mut self, bytes: u64) -> &mut Self {
        self.bytes += bytes;
        self
    }

    /// In-place [`Size::sub`].
    pub fn shrink(&mut self, other: &Self) -> &mut Self {
        self.bytes -= &other.bytes;
        self
    }

    /// In-place [`Size::sub_bytes`].
    pub fn shrink_bytes(&mut self, bytes: u64) -> &mut Self {
        self.bytes -= bytes;
        self
    }

    // ==================== Multiplication ====================

    /// `self · times`.
    #[must_use]
    pub fn mul_int(&self, times: u64) -> Self {
        Self::from(&self.bytes * times)
    }

    /// `self · factor`, truncated toward zero.
    #[must_use]
    pub fn mul_decimal(&self, factor: &BigDecimal) -> Self {
        let product = &decimal::from_bigint(&self.bytes) * factor;
        Self::from(decimal::trunc(&product))
    }

    /// Multiply by a decimal factor given as text, e.g. `"1.51"` or `"2e-3"`.
    ///
    /// The factor is read with the POSIX locale.
    pub fn mul_float_str(&self, factor: &str) -> SizeResult<Self> {
        self.mul_float_str_in(factor, &PosixLocale)
    }

    /// [`Size::mul_float_str`] with the given locale's radix.
    pub fn mul_float_str_in(&self, factor: &str, locale: &dyn Locale) -> SizeResult<Self> {
        let factor = parse::parse_decimal(factor, locale)?;
        Ok(self.mul_decimal(&factor))
    }

    /// In-place [`Size::mul_int`].
    pub fn grow_mul_int(&mut self, times: u64) -> &mut Self {
        self.bytes *= times;
        self
    }

    /// In-place [`Size::mul_float_str`].
    pub fn grow_mul_float_str(&mut self, factor: &str) -> SizeResult<&mut Self> {
        self.grow_mul_float_str_in(factor, &PosixLocale)
    }

    /// In-place [`Size::mul_float_str_in`].
    pub fn grow_mul_float_str_in(&mut self, factor: &str, locale: &dyn Locale) -> SizeResult<&mut Self> {
        *self = self.mul_float_str_in(factor, locale)?;
        Ok(self)
    }

    // ==================== Division ====================

    /// How many times `divisor` fits into `self`, truncated toward zero.
    ///
    /// The quotient is returned as a magnitude and a sign. The sign is the
    /// product of the operand signs.
    pub fn div(&self, divisor: &Self) -> SizeResult<(u64, Sign)> {
        if divisor.is_zero() {
            return Err(SizeError::zero_division("div"));
        }
        let quotient = self.bytes.magnitude() / divisor.bytes.magnitude();
        let magnitude = quotient
            .to_u64()
            .ok_or_else(|| SizeError::overflow("div", &quotient))?;
        Ok((magnitude, self.sign() * divisor.sign()))
    }

    /// `self / divisor`, truncated toward zero.
    pub fn div_int(&self, divisor: u64) -> SizeResult<Self> {
        if divisor == 0 {
            return Err(SizeError::zero_division("div_int"));
        }
        Ok(Self::from(&self.bytes / divisor))
    }

    /// In-place [`Size::div_int`].
    pub fn shrink_div_int(&mut self, divisor: u64) -> SizeResult<&mut Self> {
        *self = self.div_int(divisor)?;
        Ok(self)
    }

    /// `self / divisor` as an exact decimal string.
    ///
    /// Non-terminating quotients are cut at
    /// [`WORKING_PRECISION_DIGITS`](crate::decimal::WORKING_PRECISION_DIGITS)
    /// significant digits.
    pub fn true_div(&self, divisor: &Self) -> SizeResult<String> {
        if divisor.is_zero() {
            return Err(SizeError::zero_division("true_div"));
        }
        Ok(true_quotient(&self.bytes, &divisor.bytes))
    }

    /// [`Size::true_div`] by a plain integer.
    pub fn true_div_int(&self, divisor: u64) -> SizeResult<String> {
        if divisor == 0 {
            return Err(SizeError::zero_division("true_div_int"));
        }
        Ok(true_quotient(&self.bytes, &BigInt::from(divisor)))
    }

    /// `|self| mod |divisor|`, never negative.
    pub fn modulo(&self, divisor: &Self) -> SizeResult<Self> {
        if divisor.is_zero() {
            return Err(SizeError::zero_division("modulo"));
        }
        Ok(Self::from(BigInt::from(
            self.bytes.magnitude() % divisor.bytes.magnitude(),
        )))
    }

    /// In-place [`Size::modulo`].
    pub fn shrink_mod(&mut self, divisor: &Self) -> SizeResult<&mut Self> {
        *self = self.modulo(divisor)?;
        Ok(self)
    }

    /// [`Size::div`] and [`Size::modulo`] in one call.
    pub fn div_mod(&self, divisor: &Self) -> SizeResult<((u64, Sign), Self)> {
        Ok((self.div(divisor)?, self.modulo(divisor)?))
    }

    // ==================== Rounding ====================

    /// Round to a multiple of `alignment`.
    ///
    /// Only the magnitude of `alignment` matters. Works on the signed value,
    /// so rounding a negative size [`RoundDir::Down`] moves it away from zero.
    pub fn round_to_nearest(&self, alignment: &Self, dir: RoundDir) -> SizeResult<Self> {
        if alignment.is_zero() {
            return Err(SizeError::zero_division("round_to_nearest"));
        }
        let step = alignment.bytes.abs();
        let multiples = match dir {
            RoundDir::Down => self.bytes.div_floor(&step),
            RoundDir::Up => self.bytes.div_ceil(&step),
            RoundDir::HalfUp => (&self.bytes + (&step >> 1u8)).div_floor(&step),
        };
        Ok(Self::from(multiples * step))
    }

    /// In-place [`Size::round_to_nearest`].
    pub fn align_to(&mut self, alignment: &Self, dir: RoundDir) -> SizeResult<&mut Self> {
        *self = self.round_to_nearest(alignment, dir)?;
        Ok(self)
    }

    /// Round to a whole number of `unit`s.
    #[must_use]
    pub fn round_to_unit(&self, unit: Unit, dir: RoundDir) -> Self {
        let step = Self::from(unit.multiplier());
        // Unit multipliers are never zero.
        self.round_to_nearest(&step, dir).unwrap_or_else(|_| self.clone())
    }
}

fn true_quotient(numerator: &BigInt, denominator: &BigInt) -> String {
    let quotient = decimal::div(&decimal::from_bigint(numerator), &decimal::from_bigint(denominator));
    decimal::to_plain_string(&quotient, ".")
}

// ==================== Arithmetic Operations ====================

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from(self.bytes + rhs.bytes)
    }
}

impl Add<&Size> for &Size {
    type Output = Size;

    fn add(self, rhs: &Size) -> Self::Output {
        Size::add(self, rhs)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Self) {
        self.bytes += rhs.bytes;
    }
}

impl AddAssign<&Size> for Size {
    fn add_assign(&mut self, rhs: &Size) {
        self.grow(rhs);
    }
}

impl Sub for Size {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from(self.bytes - rhs.bytes)
    }
}

impl Sub<&Size> for &Size {
    type Output = Size;

    fn sub(self, rhs: &Size) -> Self::Output {
        Size::sub(self, rhs)
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Self) {
        self.bytes -= rhs.bytes;
    }
}

impl SubAssign<&Size> for Size {
    fn sub_assign(&mut self, rhs: &Size) {
        self.shrink(rhs);
    }
}

impl Mul<u64> for Size {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        Self::from(self.bytes * rhs)
    }
}

impl Mul<u64> for &Size {
    type Output = Size;

    fn mul(self, rhs: u64) -> Self::Output {
        self.mul_int(rhs)
    }
}

impl MulAssign<u64> for Size {
    fn mul_assign(&mut self, rhs: u64) {
        self.grow_mul_int(rhs);
    }
}

impl Neg for Size {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(-self.bytes)
    }
}

impl Neg for &Size {
    type Output = Size;

    fn neg(self) -> Self::Output {
        Size::from(-&self.bytes)
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, size| acc + size)
    }
}

impl<'a> Sum<&'a Size> for Size {
    fn sum<I: Iterator<Item = &'a Size>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut acc, size| {
            acc.grow(size);
            acc
        })
    }
}
