use serde::Deserialize;

use crate::error::Error;

/// JSON-RPC 2.0 response wrapper shared by every CometBFT endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub jsonrpc: String,
    pub id: i64,
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

impl<T> Envelope<T> {
    /// Splits the envelope into its payload, preferring the error object
    /// when the server sent one.
    pub fn into_result(self, endpoint: &str) -> Result<T, Error> {
        if let Some(error) = self.error {
            return Err(Error::Rpc(error));
        }

        self.result.ok_or_else(|| Error::MissingResult {
            endpoint: endpoint.to_owned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}
