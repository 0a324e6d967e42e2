//! Serde field helpers for the CometBFT JSON schema.
//!
//! CometBFT encodes 64-bit integers (heights, gas) as JSON strings and raw
//! byte payloads as standard base64. The default serde decoders reject both,
//! so the affected fields opt into the helpers below with
//! `#[serde(deserialize_with = "...")]`.

use core::fmt;

use base64::{engine::general_purpose, Engine};
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};

/// Decodes an `i64` transmitted as a string of digits (`"123"`).
///
/// Plain JSON numbers are accepted too, since some proxies re-encode the
/// payload.
pub fn string_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringI64Visitor)
}

struct StringI64Visitor;

impl<'de> Visitor<'de> for StringI64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string-encoded 64-bit integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<i64, E>
    where
        E: de::Error,
    {
        value
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_i64<E>(self, value: i64) -> Result<i64, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<i64, E>
    where
        E: de::Error,
    {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }
}

/// Decodes a standard base64 string into raw bytes.
pub fn base64_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = Option::<String>::deserialize(deserializer)?;

    match encoded {
        Some(value) => general_purpose::STANDARD
            .decode(value.as_bytes())
            .map_err(de::Error::custom),
        None => Ok(Vec::new()),
    }
}

/// Treats an explicit `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
