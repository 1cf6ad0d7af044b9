use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::auth::config::AuthConfigFactory;
use crate::auth::grant::GrantType;
use crate::auth::token::{GrantOutcome, Token, TokenError};

/// Default issuer for the public AAD cloud.
pub const DEFAULT_ISSUER: &str = "https://login.microsoftonline.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for token grants against an OAuth2 identity provider.
///
/// Both grant flows post to `{issuer}/{tenant}/oauth2/v2.0/token` and map
/// the response the same way: a 2xx body is a [`Token`], a non-2xx body is
/// a [`TokenError`]. Neither is an error to the caller; only transport
/// faults (connection failure, unparseable body) propagate as failures.
///
/// Credentials are re-resolved through the factory on every attempt, so a
/// secret rotated in the environment is picked up without rebuilding the
/// client.
///
/// ```no_run
/// # use ecoverse_client::auth::{AuthConfig, AuthenticationClient, GrantOutcome};
/// # async fn demo() -> anyhow::Result<()> {
/// let client = AuthenticationClient::new(AuthConfig::env_factory())?;
/// match client.authenticate_client_credentials().await? {
///     GrantOutcome::Granted(token) => println!("bearer: {}", token.access_token),
///     GrantOutcome::Denied(err) => println!("grant rejected: {}", err.error),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AuthenticationClient {
    issuer: String,
    config: AuthConfigFactory,
    http_client: Client,
}

impl AuthenticationClient {
    /// Create a client against the public issuer.
    pub fn new(config: AuthConfigFactory) -> Result<Self> {
        Self::with_issuer(DEFAULT_ISSUER, config)
    }

    /// Create a client against a specific issuer base URL (sovereign clouds,
    /// stub servers in tests).
    pub fn with_issuer(issuer: impl Into<String>, config: AuthConfigFactory) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("creating HTTP client")?;

        Ok(Self {
            issuer: issuer.into().trim_end_matches('/').to_string(),
            config,
            http_client,
        })
    }

    /// Resource Owner Password Credentials flow.
    ///
    /// Requires `client_id`, `scope`, `username` and `password` in the
    /// resolved config.
    pub async fn authenticate_password_credentials(&self) -> Result<GrantOutcome> {
        self.request_token(GrantType::PasswordCredentials).await
    }

    /// Client credentials flow, authenticating the application itself.
    ///
    /// Requires `client_id`, `client_secret` and `scope` in the resolved
    /// config.
    pub async fn authenticate_client_credentials(&self) -> Result<GrantOutcome> {
        self.request_token(GrantType::ClientCredentials).await
    }

    /// Shared request path for both flows: build the grant's parameter set,
    /// post it form-encoded, and split the response on its status class.
    async fn request_token(&self, grant: GrantType) -> Result<GrantOutcome> {
        let config = (self.config)();
        let url = format!("{}/{}/oauth2/v2.0/token", self.issuer, config.tenant);
        let params = grant.form_params(&config);

        debug!(
            url = %url,
            grant_type = %grant.as_str(),
            client_id = %config.client_id,
            "requesting token"
        );

        let response = self
            .http_client
            .post(&url)
            .form(&params)
            .send()
            .await
            .context("sending token request")?;

        let status = response.status();
        if status.is_success() {
            let token: Token = response
                .json()
                .await
                .context("parsing token response")?;
            info!(grant_type = %grant.as_str(), "token granted");
            Ok(GrantOutcome::Granted(token))
        } else {
            let err: TokenError = response
                .json()
                .await
                .with_context(|| format!("parsing error body for status {status}"))?;
            debug!(
                grant_type = %grant.as_str(),
                status = %status,
                error = %err.error,
                "grant rejected by provider"
            );
            Ok(GrantOutcome::Denied(err))
        }
    }
}
