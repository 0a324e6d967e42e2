use std::{
    collections::BTreeMap,
    env::{self, VarError},
    time::Duration,
};

use url::Url;

use crate::error::Error;

pub const DEFAULT_NODE: &str = "https://rpc.celestia.pops.one";
pub const NODE_ENV: &str = "TIA_NODE";
pub const USER_AGENT: &str = "tia-cli-explorer";
pub const TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters of a single request, encoded in key order.
pub type QueryArgs = BTreeMap<&'static str, String>;

#[derive(Debug, Clone)]
pub struct Config {
    pub node_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn new(node: &str) -> Result<Config, Error> {
        let node_url = Url::parse(node.trim())?;

        match node_url.scheme() {
            "http" | "https" => {},
            scheme => {
                return Err(Error::ConfigurationError(format!(
                    "unsupported node url scheme {}",
                    scheme
                )));
            },
        }

        if node_url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "node url {} cannot be a base",
                node_url
            )));
        }

        Ok(Config {
            node_url,
            timeout: TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
        })
    }

    /// `<node_url>/<endpoint>?<args>`, keeping any path prefix and query
    /// parameters already present on the node url.
    pub fn get_endpoint_url(
        &self,
        endpoint: &str,
        args: &QueryArgs,
    ) -> Result<Url, Error> {
        let mut url = self.node_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                Error::ConfigurationError(format!(
                    "node url {} cannot be a base",
                    self.node_url
                ))
            })?
            .pop_if_empty()
            .push(endpoint);

        if !args.is_empty() {
            url.query_pairs_mut().extend_pairs(args.iter());
        }

        Ok(url)
    }
}

/// Resolves the node url from the command line, then `TIA_NODE`, then the
/// public default.
pub fn get_configuration(node: Option<String>) -> Result<Config, Error> {
    let node = match node {
        Some(node) => node,
        None => match env::var(NODE_ENV) {
            Ok(node) => node,
            Err(VarError::NotPresent) => DEFAULT_NODE.to_owned(),
            Err(e) => {
                return Err(Error::ConfigurationError(format!(
                    "{}: {}",
                    NODE_ENV, e
                )));
            },
        },
    };

    Config::new(&node)
}
