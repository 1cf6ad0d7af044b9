pub mod client;
pub mod config;
pub mod grant;
pub mod store;
pub mod token;

pub use client::AuthenticationClient;
pub use config::{AuthConfig, AuthConfigFactory};
pub use grant::GrantType;
pub use store::TokenStore;
pub use token::{GrantOutcome, Token, TokenError};
