use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Access token payload returned by the identity provider on a successful
/// grant.
///
/// The client treats the token as opaque: the well-known fields are split
/// out for convenience and everything else the provider sends is preserved
/// in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Error payload returned by the identity provider when it rejects a grant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Result of one grant attempt: the provider either granted a token or
/// rejected the request. Both are ordinary return values; raising is
/// reserved for transport faults.
#[derive(Debug, Clone, PartialEq)]
pub enum GrantOutcome {
    Granted(Token),
    Denied(TokenError),
}

impl GrantOutcome {
    pub fn granted(&self) -> Option<&Token> {
        match self {
            GrantOutcome::Granted(token) => Some(token),
            GrantOutcome::Denied(_) => None,
        }
    }

    pub fn denied(&self) -> Option<&TokenError> {
        match self {
            GrantOutcome::Granted(_) => None,
            GrantOutcome::Denied(err) => Some(err),
        }
    }
}
