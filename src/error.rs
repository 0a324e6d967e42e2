use hex::FromHexError as HEX_ERROR;
use reqwest::Error as REQWEST_ERROR;
use serde_json::Error as JSON_ERROR;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;
use url::ParseError as URL_ERROR;

use crate::types::RpcError;

/// Messages leave the wrapped error out; print with `{:#}` to see the chain.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    URL(#[from] URL_ERROR),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Tracing error")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error(transparent)]
    ReqwestError(#[from] REQWEST_ERROR),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: REQWEST_ERROR,
    },

    #[error("unexpected status code: {status}, body: {body}")]
    Protocol { status: u16, body: String },

    #[error("invalid {endpoint} response")]
    Decode {
        endpoint: String,
        #[source]
        source: JSON_ERROR,
    },

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("{endpoint} response has neither result nor error")]
    MissingResult { endpoint: String },

    #[error("request {0}")]
    Cancelled(CancelReason),

    #[error("invalid block height: {0}")]
    InvalidHeight(String),

    #[error("invalid transaction hash")]
    InvalidHash(#[from] HEX_ERROR),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }
}

/// Why a request context stopped before the response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Canceled,
    DeadlineExceeded,
}

impl std::fmt::Display for CancelReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelReason::Canceled => f.write_str("canceled"),
            CancelReason::DeadlineExceeded => {
                f.write_str("deadline exceeded")
            },
        }
    }
}
