use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::auth::client::DEFAULT_ISSUER;

/// Endpoint configuration for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// GraphQL endpoint, e.g. `https://hub.example.org/graphql`.
    pub graphql_endpoint: String,
    /// Token issuer base URL; defaults to the public AAD cloud.
    #[serde(default = "default_issuer")]
    pub token_issuer: String,
}

fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}

impl ClientConfig {
    /// Read configuration from environment variables.
    ///
    /// - `GRAPHQL_ENDPOINT` (required)
    /// - `AUTH_AAD_ISSUER` (optional, defaults to the public issuer)
    pub fn from_env() -> Result<Self> {
        let graphql_endpoint =
            std::env::var("GRAPHQL_ENDPOINT").context("GRAPHQL_ENDPOINT is not set")?;
        let token_issuer =
            std::env::var("AUTH_AAD_ISSUER").unwrap_or_else(|_| default_issuer());
        Ok(Self {
            graphql_endpoint,
            token_issuer,
        })
    }

    /// Read configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path).context("reading config file")?;
        let config: ClientConfig = serde_json::from_str(&raw).context("parsing JSON")?;
        Ok(config)
    }
}
