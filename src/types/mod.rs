pub use self::{
    block_response::{
        Block, BlockData, BlockHeader, BlockId, BlockResult, BlockVersion, Commit,
        CommitSignature, Evidence, PartSetHeader,
    },
    response::{Envelope, RpcError},
    status_response::{
        NodeInfo, NodeInfoOther, ProtocolVersion, PubKey, StatusResult,
        SyncInfo, ValidatorInfo,
    },
    tx_response::{EventAttribute, EventData, ExecTxResult, TxResult},
};

mod block_response;
mod response;
mod status_response;
mod tx_response;

#[cfg(test)]
pub(crate) mod fixtures;
