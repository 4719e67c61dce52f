#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # bytesize
//!
//! Exact, arbitrary-precision storage sizes.
//!
//! A [`Size`] is a signed number of bytes with no upper bound. Sizes are
//! built from specifications such as `"1.5 GiB"` or `"-12e3 KB"`, combined
//! with exact arithmetic, and rendered back as exact byte counts, unit
//! conversions or human-readable strings:
//!
//! - [`parse`] -- locale-aware specification grammar
//! - [`ops`] -- addition, multiplication, division, modulo and rounding
//! - [`format`] -- unit conversion and human-readable output
//! - [`Locale`] -- decimal separator and translated unit names
//!
//! ```
//! use bytesize::{BinaryUnit, RoundDir, Size};
//!
//! let disk: Size = "500 GB".parse()?;
//! let part = disk.div_int(3)?.round_to_nearest(&"1 MiB".parse()?, RoundDir::Down)?;
//! assert_eq!(part.human_readable(BinaryUnit::B, Some(2), false), "155.22 GiB");
//! # Ok::<(), bytesize::SizeError>(())
//! ```
//!
//! Fractional values never pass through machine floats: parsing and factor
//! multiplication are exact and division keeps
//! [`WORKING_PRECISION_DIGITS`] significant digits.
//!
//! ## Features
//!
//! - `serde` -- `Serialize`/`Deserialize` for [`Size`].

pub mod decimal;
pub mod error;
pub mod format;
pub mod locale;
pub mod ops;
pub mod parse;
pub mod size;
pub mod unit;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde;

pub use decimal::{WORKING_PRECISION_BITS, WORKING_PRECISION_DIGITS};
pub use error::{SizeError, SizeErrorKind, SizeResult};
pub use format::DEFAULT_PLACES;
pub use locale::{FixedLocale, Locale, PosixLocale};
pub use ops::RoundDir;
pub use parse::{MAX_EXPONENT, parse_decimal, resolve_unit};
pub use size::{Sign, Size};
pub use unit::{BinaryUnit, DecimalUnit, Unit};

pub use bigdecimal;
pub use num_bigint;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{BinaryUnit, DecimalUnit, Locale, RoundDir, Sign, Size, SizeError, SizeResult, Unit};
}
