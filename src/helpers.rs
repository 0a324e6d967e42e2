use base64::{engine::general_purpose, Engine};
use chrono::{DateTime, Utc};

use crate::error::Error;

pub const LATEST: &str = "latest";

/// Block height argument; missing or `latest` selects the chain head (0).
pub fn parse_height(value: Option<&str>) -> Result<i64, Error> {
    let value = match value.map(str::trim) {
        None => return Ok(0),
        Some(value) if value.eq_ignore_ascii_case(LATEST) => return Ok(0),
        Some(value) => value,
    };

    let height: i64 = value
        .parse()
        .map_err(|e| Error::InvalidHeight(format!("{:?}: {}", value, e)))?;

    if height < 0 {
        return Err(Error::InvalidHeight(format!(
            "{:?}: must not be negative",
            value
        )));
    }

    Ok(height)
}

/// Hex transaction hash, with or without a `0x` prefix, in either case.
pub fn parse_tx_hash(value: &str) -> Result<Vec<u8>, Error> {
    let value = value.trim();
    let value = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if value.is_empty() {
        return Err(Error::InvalidHash(hex::FromHexError::InvalidStringLength));
    }

    Ok(hex::decode(value)?)
}

/// Query parameter form of a transaction hash: `0x` + uppercase hex.
pub fn encode_hash(hash: &[u8]) -> String {
    format!("0x{}", hex::encode_upper(hash))
}

/// Event attributes arrive base64 encoded from older nodes and as plain text
/// from newer ones. Anything that is not base64 of UTF-8 text is shown as
/// received.
pub fn decode_attribute(raw: &str) -> String {
    match general_purpose::STANDARD.decode(raw) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => raw.to_owned(),
        },
        Err(_) => raw.to_owned(),
    }
}

pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
