use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::auth::TokenStore;
use crate::graphql::envelope::OperationResponse;
use crate::graphql::operations::Operation;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Executor for operations against the ecoverse GraphQL endpoint.
///
/// Sends `{query, operationName, variables}` and returns the raw response
/// envelope; deciding what an error list means is the caller's job. The
/// bearer for the `Authorization` header is read from the shared
/// [`TokenStore`] on every request, and the header is omitted while the
/// store is empty.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
    tokens: TokenStore,
    http_client: Client,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>, tokens: TokenStore) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("creating HTTP client")?;

        Ok(Self {
            endpoint: endpoint.into(),
            tokens,
            http_client,
        })
    }

    async fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let request_id = Uuid::new_v4().to_string();
        headers.insert("X-Request-Id", HeaderValue::from_str(&request_id)?);

        if let Some(bearer) = self.tokens.get().await {
            let value = format!("Bearer {}", bearer);
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&value)?);
        }

        Ok(headers)
    }

    /// Execute one operation and parse the envelope.
    pub async fn execute(&self, operation: Operation, variables: Value) -> Result<OperationResponse> {
        let payload = json!({
            "query": operation.document,
            "operationName": operation.name,
            "variables": variables,
        });

        trace!(
            endpoint = %self.endpoint,
            operation = %operation.name,
            "executing operation"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .headers(self.request_headers().await?)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("sending operation `{}`", operation.name))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("reading response for `{}`", operation.name))?;

        let mut envelope: OperationResponse = serde_json::from_str(&body)
            .with_context(|| format!("parsing response for `{}` (status {status})", operation.name))?;
        envelope.status = status.as_u16();

        debug!(
            operation = %operation.name,
            status = %status,
            errors = envelope.errors.len(),
            "operation executed"
        );

        Ok(envelope)
    }
}
