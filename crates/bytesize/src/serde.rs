//! Serde support, behind the `serde` feature.
//!
//! A [`Size`] serializes as its exact signed byte count in a string, since
//! the value may not fit any integer type a format supports natively.
//! Deserialization accepts that string, any size specification such as
//! `"1.5 GiB"`, or a plain integer number of bytes.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::size::Size;

impl Serialize for Size {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bytes_str())
    }
}

struct SizeVisitor;

impl Visitor<'_> for SizeVisitor {
    type Value = Size;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a byte count or a size specification string")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Size::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Size::from(v))
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Size::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Size::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SizeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_exact_bytes() {
        let size: Size = "1 YiB".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&size).unwrap(),
            r#""1208925819614629174706176""#
        );
    }

    #[test]
    fn deserializes_strings_and_integers() {
        let from_spec: Size = serde_json::from_str(r#""1.5 KiB""#).unwrap();
        let from_int: Size = serde_json::from_str("1536").unwrap();
        let from_negative: Size = serde_json::from_str("-1536").unwrap();
        assert_eq!(from_spec, from_int);
        assert_eq!(from_negative, -from_int);
    }

    #[test]
    fn round_trips_through_json() {
        let size: Size = "-3.25 EiB".parse().unwrap();
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(serde_json::from_str::<Size>(&json).unwrap(), size);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Size>(r#""lots""#).is_err());
        assert!(serde_json::from_str::<Size>("1.5").is_err());
    }
}
