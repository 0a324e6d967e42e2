use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::custom_int::string_i64;

/// Result of the `status` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResult {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
    pub validator_info: ValidatorInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfo {
    pub protocol_version: ProtocolVersion,
    pub id: String,
    pub listen_addr: String,
    pub network: String,
    pub version: String,
    #[serde(default)]
    pub channels: String,
    pub moniker: String,
    #[serde(default)]
    pub other: NodeInfoOther,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolVersion {
    pub p2p: String,
    pub block: String,
    pub app: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeInfoOther {
    #[serde(default)]
    pub tx_index: String,
    #[serde(default)]
    pub rpc_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncInfo {
    pub latest_block_hash: String,
    pub latest_app_hash: String,
    #[serde(deserialize_with = "string_i64")]
    pub latest_block_height: i64,
    pub latest_block_time: DateTime<Utc>,
    pub catching_up: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorInfo {
    pub address: String,
    pub pub_key: PubKey,
    pub voting_power: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PubKey {
    pub r#type: String,
    pub value: String,
}
