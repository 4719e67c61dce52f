//! Operand values and the operator table.
//!
//! Sizes mix with plain numbers the way byte counts would: numbers added
//! to or subtracted from a size count bytes, multiplying or dividing a size
//! by a number scales it, and dividing two sizes yields a number. Fractional
//! bytes are truncated toward zero.

use std::fmt;

use bytesize::bigdecimal::BigDecimal;
use bytesize::decimal;
use bytesize::num_bigint::BigInt;
use bytesize::{Size, SizeErrorKind};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use super::CalcError;

/// Largest accepted exponent of `**`.
pub const MAX_POWER: u32 = 10_000;

/// A number or a size.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(BigInt),
    Decimal(BigDecimal),
    Size(Size),
}

#[allow(clippy::should_implement_trait, clippy::unnecessary_wraps)]
impl Value {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::Size(_) => "Size",
        }
    }

    /// The value as a decimal, `None` for sizes.
    fn number(&self) -> Option<BigDecimal> {
        match self {
            Self::Int(int) => Some(decimal::from_bigint(int)),
            Self::Decimal(dec) => Some(dec.clone()),
            Self::Size(_) => None,
        }
    }

    /// A number read as a byte count.
    fn as_size(&self) -> Size {
        match self {
            Self::Int(int) => Size::from(int.clone()),
            Self::Decimal(dec) => Size::from(decimal::trunc(dec)),
            Self::Size(size) => size.clone(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Self::Int(int) => int.is_zero(),
            Self::Decimal(dec) => dec.is_zero(),
            Self::Size(size) => size.is_zero(),
        }
    }

    // ==================== Operators ====================

    pub fn neg(self) -> Self {
        match self {
            Self::Int(int) => Self::Int(-int),
            Self::Decimal(dec) => Self::Decimal(-dec),
            Self::Size(size) => Self::Size(-size),
        }
    }

    pub fn add(&self, rhs: &Self) -> Result<Self, CalcError> {
        Ok(match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a + b),
            (Self::Size(_), _) | (_, Self::Size(_)) => {
                Self::Size(self.as_size().add(&rhs.as_size()))
            }
            _ => Self::Decimal(self.decimal() + rhs.decimal()),
        })
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self, CalcError> {
        Ok(match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a - b),
            (Self::Size(_), _) | (_, Self::Size(_)) => {
                Self::Size(self.as_size().sub(&rhs.as_size()))
            }
            _ => Self::Decimal(self.decimal() - rhs.decimal()),
        })
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self, CalcError> {
        Ok(match (self, rhs) {
            (Self::Size(_), Self::Size(_)) => {
                return Err(CalcError::Type(
                    "Cannot multiply Size by Size. It just doesn't make sense.".to_string(),
                ));
            }
            (Self::Size(size), Self::Int(int)) | (Self::Int(int), Self::Size(size)) => {
                Self::Size(Size::from(size.as_bigint() * int))
            }
            (Self::Size(size), Self::Decimal(dec)) | (Self::Decimal(dec), Self::Size(size)) => {
                Self::Size(size.mul_decimal(dec))
            }
            (Self::Int(a), Self::Int(b)) => Self::Int(a * b),
            _ => Self::Decimal(self.decimal() * rhs.decimal()),
        })
    }

    /// `/`: true division.
    pub fn div(&self, rhs: &Self) -> Result<Self, CalcError> {
        if rhs.is_zero() {
            return Err(CalcError::ZeroDivision);
        }
        Ok(match (self, rhs) {
            (Self::Size(a), Self::Size(b)) => Self::Decimal(decimal::div(
                &decimal::from_bigint(a.as_bigint()),
                &decimal::from_bigint(b.as_bigint()),
            )),
            (Self::Size(size), Self::Int(int)) => match int.to_u64() {
                Some(divisor) => Self::Size(size.div_int(divisor).map_err(CalcError::Size)?),
                None => Self::Size(Size::from(size.as_bigint() / int)),
            },
            (Self::Size(size), Self::Decimal(dec)) => {
                let bytes = decimal::from_bigint(size.as_bigint());
                Self::Size(Size::from(decimal::trunc(&decimal::div(&bytes, dec))))
            }
            (_, Self::Size(_)) => return Err(self.unsupported("/", rhs)),
            _ => Self::Decimal(decimal::div(&self.decimal(), &rhs.decimal())),
        })
    }

    /// `//`: division rounded to an integer.
    ///
    /// Between sizes it truncates toward zero; plain integers floor like
    /// ordinary integer arithmetic.
    pub fn floor_div(&self, rhs: &Self) -> Result<Self, CalcError> {
        if rhs.is_zero() {
            return Err(CalcError::ZeroDivision);
        }
        Ok(match (self, rhs) {
            (Self::Size(a), Self::Size(b)) => match a.div(b) {
                Ok((quotient, sign)) => Self::Int(BigInt::from(quotient) * sign.as_i32()),
                Err(err) if err.kind() == SizeErrorKind::Overflow => {
                    Self::Int(a.as_bigint() / b.as_bigint())
                }
                Err(err) => return Err(CalcError::Size(err)),
            },
            (Self::Size(_), Self::Int(_) | Self::Decimal(_)) => return self.div(rhs),
            (_, Self::Size(_)) => return Err(self.unsupported("//", rhs)),
            (Self::Int(a), Self::Int(b)) => Self::Int(a.div_floor(b)),
            _ => {
                let quotient = decimal::div(&self.decimal(), &rhs.decimal());
                Self::Decimal(decimal::from_bigint(&decimal::trunc(&quotient)))
            }
        })
    }

    /// `%`: remainder.
    pub fn rem(&self, rhs: &Self) -> Result<Self, CalcError> {
        match (self, rhs) {
            (Self::Size(a), Self::Size(b)) => {
                if b.is_zero() {
                    return Err(CalcError::ZeroDivision);
                }
                return a.modulo(b).map(Self::Size).map_err(CalcError::Size);
            }
            (Self::Size(_), _) | (_, Self::Size(_)) => {
                return Err(CalcError::Type(
                    "modulo operation only supported between two Size instances".to_string(),
                ));
            }
            _ => {}
        }
        if rhs.is_zero() {
            return Err(CalcError::ZeroDivision);
        }
        Ok(match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Self::Int(a.mod_floor(b)),
            _ => {
                let (a, b) = (self.decimal(), rhs.decimal());
                let whole = decimal::from_bigint(&decimal::trunc(&decimal::div(&a, &b)));
                Self::Decimal(a - b * whole)
            }
        })
    }

    /// `**`: integer powers of numbers.
    pub fn pow(&self, rhs: &Self) -> Result<Self, CalcError> {
        if matches!(self, Self::Size(_)) || matches!(rhs, Self::Size(_)) {
            return Err(self.unsupported("**", rhs));
        }
        let exponent = match rhs {
            Self::Int(int) => int.clone(),
            Self::Decimal(dec) if dec.is_integer() => decimal::trunc(dec),
            _ => return Err(CalcError::Type("only integer exponents are supported".to_string())),
        };
        let magnitude = exponent
            .magnitude()
            .to_u32()
            .filter(|power| *power <= MAX_POWER)
            .ok_or_else(|| CalcError::Type(format!("exponent {exponent} is too large")))?;

        let value = match self {
            Self::Int(base) if !exponent.is_negative() => {
                return Ok(Self::Int(num_traits::pow(base.clone(), magnitude as usize)));
            }
            _ => num_traits::pow(self.decimal(), magnitude as usize),
        };
        if !exponent.is_negative() {
            return Ok(Self::Decimal(value));
        }
        if value.is_zero() {
            return Err(CalcError::ZeroDivision);
        }
        Ok(Self::Decimal(decimal::div(&BigDecimal::from(1), &value)))
    }

    fn decimal(&self) -> BigDecimal {
        self.number().unwrap_or_default()
    }

    fn unsupported(&self, op: &str, rhs: &Self) -> CalcError {
        CalcError::Type(format!(
            "unsupported operand types for {op}: {} and {}",
            self.kind(),
            rhs.kind()
        ))
    }
}

/// Plain rendering of numbers; sizes show their exact byte count.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::Decimal(dec) => f.write_str(&decimal::to_plain_string(dec, ".")),
            Self::Size(size) => write!(f, "{} B", size.bytes_str()),
        }
    }
}
