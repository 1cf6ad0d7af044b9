use crate::auth::config::AuthConfig;

/// OAuth2 grant flows supported against the token endpoint.
///
/// [RFC 6749 Section 4.3](https://tools.ietf.org/html/rfc6749#section-4.3)
/// (resource owner password credentials) and
/// [Section 4.4](https://tools.ietf.org/html/rfc6749#section-4.4)
/// (client credentials).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    PasswordCredentials,
    ClientCredentials,
}

impl GrantType {
    /// The `grant_type` discriminator sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            GrantType::PasswordCredentials => "password",
            GrantType::ClientCredentials => "client_credentials",
        }
    }

    /// Build the form parameter set for this flow.
    ///
    /// Each flow sends exactly its required fields and nothing else; the
    /// password flow never includes the client secret, the client-credentials
    /// flow never includes resource-owner credentials.
    pub fn form_params(self, config: &AuthConfig) -> Vec<(&'static str, String)> {
        match self {
            GrantType::PasswordCredentials => vec![
                ("client_id", config.client_id.clone()),
                ("scope", config.scope.clone()),
                ("username", config.username.clone()),
                ("password", config.password.clone()),
                ("grant_type", self.as_str().to_string()),
            ],
            GrantType::ClientCredentials => vec![
                ("client_id", config.client_id.clone()),
                ("client_secret", config.client_secret.clone()),
                ("scope", config.scope.clone()),
                ("grant_type", self.as_str().to_string()),
            ],
        }
    }
}
