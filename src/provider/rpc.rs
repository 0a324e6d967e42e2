use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{
    configuration::{Config, QueryArgs},
    error::Error,
    helpers::encode_hash,
    types::{BlockResult, Envelope, StatusResult, TxResult},
};

use super::Context;

/// Typed client for the CometBFT JSON-RPC `block`, `status` and `tx`
/// endpoints (URI over HTTP GET).
///
/// Holds only immutable configuration and a pooled HTTP client, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RpcClient {
    config: Config,
    http: Client,
}

impl RpcClient {
    pub fn new(config: Config) -> Result<RpcClient, Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(RpcClient { config, http })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Height `0` selects the latest block.
    pub async fn get_block(
        &self,
        ctx: &Context,
        height: i64,
    ) -> Result<BlockResult, Error> {
        let mut args = QueryArgs::new();
        if height != 0 {
            args.insert("height", height.to_string());
        }

        self.get(ctx, "block", args).await
    }

    pub async fn get_status(&self, ctx: &Context) -> Result<StatusResult, Error> {
        self.get(ctx, "status", QueryArgs::new()).await
    }

    pub async fn get_tx(
        &self,
        ctx: &Context,
        hash: &[u8],
    ) -> Result<TxResult, Error> {
        let mut args = QueryArgs::new();
        args.insert("hash", encode_hash(hash));

        self.get(ctx, "tx", args).await
    }

    async fn get<T>(
        &self,
        ctx: &Context,
        endpoint: &str,
        args: QueryArgs,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        if let Some(reason) = ctx.err() {
            return Err(Error::Cancelled(reason));
        }

        let url = self.config.get_endpoint_url(endpoint, &args)?;
        debug!(endpoint, %url, "rpc request");

        tokio::select! {
            biased;

            reason = ctx.done() => {
                debug!(endpoint, %reason, "rpc request aborted");
                Err(Error::Cancelled(reason))
            },
            result = self.fetch(endpoint, url) => result,
        }
    }

    async fn fetch<T>(&self, endpoint: &str, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let target = url.to_string();
        let transport = |source: reqwest::Error| Error::Transport {
            url: target.clone(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "rpc response");

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| Error::Decode {
                endpoint: endpoint.to_owned(),
                source,
            })?;

        envelope.into_result(endpoint)
    }
}
