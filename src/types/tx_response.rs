use serde::Deserialize;

use crate::custom_int::{base64_bytes, null_as_default, string_i64};

/// Result of the `tx` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TxResult {
    #[serde(default)]
    pub hash: String,
    #[serde(deserialize_with = "string_i64")]
    pub height: i64,
    pub index: u32,
    pub tx_result: ExecTxResult,
    #[serde(default, deserialize_with = "base64_bytes")]
    pub tx: Vec<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExecTxResult {
    #[serde(default)]
    pub code: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codespace: String,
    #[serde(default, deserialize_with = "string_i64")]
    pub gas_wanted: i64,
    #[serde(default, deserialize_with = "string_i64")]
    pub gas_used: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<EventData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventData {
    pub r#type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<EventAttribute>,
}

/// Key and value are kept in their wire form; older nodes base64 encode
/// them, newer ones send plain text.
#[derive(Debug, Clone, Deserialize)]
pub struct EventAttribute {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default)]
    pub index: bool,
}
