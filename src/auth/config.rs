use std::sync::Arc;

/// Credential set for one token grant attempt.
///
/// Captured immutably per attempt; the client re-resolves it through an
/// [`AuthConfigFactory`] on every call so rotated credentials take effect
/// without rebuilding the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    pub tenant: String,
    pub username: String,
    pub password: String,
}

/// Factory invoked once per grant attempt to obtain the current credentials.
pub type AuthConfigFactory = Arc<dyn Fn() -> AuthConfig + Send + Sync>;

impl AuthConfig {
    /// Read credentials from environment variables.
    ///
    /// - `AUTH_AAD_CLIENT_ID`: application (client) id
    /// - `AUTH_AAD_CLIENT_SECRET`: client secret (client-credentials flow)
    /// - `AUTH_AAD_SCOPE`: requested scope
    /// - `AUTH_AAD_TENANT`: tenant id or domain
    /// - `AUTH_AAD_USERNAME` / `AUTH_AAD_PASSWORD`: resource owner (password flow)
    ///
    /// Missing variables resolve to empty strings; which fields are actually
    /// required depends on the grant flow being run.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            client_id: var("AUTH_AAD_CLIENT_ID"),
            client_secret: var("AUTH_AAD_CLIENT_SECRET"),
            scope: var("AUTH_AAD_SCOPE"),
            tenant: var("AUTH_AAD_TENANT"),
            username: var("AUTH_AAD_USERNAME"),
            password: var("AUTH_AAD_PASSWORD"),
        }
    }

    /// Wrap a fixed config in a factory, for callers whose credentials do
    /// not rotate.
    pub fn into_factory(self) -> AuthConfigFactory {
        Arc::new(move || self.clone())
    }

    /// Factory that re-reads the environment on every grant attempt.
    pub fn env_factory() -> AuthConfigFactory {
        Arc::new(AuthConfig::from_env)
    }
}
