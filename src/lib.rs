pub mod auth;
pub mod config;
pub mod ecoverse;
pub mod error;
pub mod graphql;
pub mod logging;

// Crate version exposed for runtime queries
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
