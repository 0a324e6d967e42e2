use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::custom_int::{null_as_default, string_i64};

/// Result of the `block` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockResult {
    pub block_id: BlockId,
    pub block: Block,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockId {
    pub hash: String,
    pub parts: PartSetHeader,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartSetHeader {
    pub total: u32,
    pub hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub data: BlockData,
    pub evidence: Evidence,
    pub last_commit: Commit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockHeader {
    #[serde(default)]
    pub version: BlockVersion,
    pub chain_id: String,
    #[serde(deserialize_with = "string_i64")]
    pub height: i64,
    pub time: DateTime<Utc>,
    pub last_block_id: BlockId,
    pub last_commit_hash: String,
    pub data_hash: String,
    pub validators_hash: String,
    pub next_validators_hash: String,
    pub consensus_hash: String,
    pub app_hash: String,
    pub last_results_hash: String,
    pub evidence_hash: String,
    pub proposer_address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockVersion {
    #[serde(default)]
    pub block: String,
    #[serde(default)]
    pub app: String,
}

/// Transactions are kept in their wire (base64) form.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub txs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Evidence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub evidence: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    #[serde(deserialize_with = "string_i64")]
    pub height: i64,
    pub round: i32,
    pub block_id: BlockId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub signatures: Vec<CommitSignature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    pub block_id_flag: i32,
    pub validator_address: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub signature: Option<String>,
}
