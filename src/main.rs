use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use ecoverse_client::auth::{AuthConfig, AuthenticationClient, GrantOutcome, GrantType};
use ecoverse_client::config::ClientConfig;
use ecoverse_client::ecoverse::EcoverseClient;
use ecoverse_client::logging;

#[derive(Parser)]
#[command(name = "ecoverse", version, about = "Ecoverse API client")]
struct AppCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Flow {
    /// Resource owner password credentials
    Password,
    /// Client credentials
    ClientCredentials,
}

impl From<Flow> for GrantType {
    fn from(flow: Flow) -> Self {
        match flow {
            Flow::Password => GrantType::PasswordCredentials,
            Flow::ClientCredentials => GrantType::ClientCredentials,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire a token from the identity provider and print the outcome
    Token {
        #[arg(long, value_enum, default_value = "client-credentials")]
        flow: Flow,
    },
    /// Authenticate and probe the GraphQL endpoint
    Check {
        /// Config file path; environment variables are used when omitted
        #[arg(short, long)]
        config: Option<String>,
    },
}

async fn acquire_token(flow: Flow) -> Result<()> {
    let issuer = std::env::var("AUTH_AAD_ISSUER")
        .unwrap_or_else(|_| ecoverse_client::auth::client::DEFAULT_ISSUER.to_string());
    let client = AuthenticationClient::with_issuer(issuer, AuthConfig::env_factory())?;

    let outcome = match GrantType::from(flow) {
        GrantType::PasswordCredentials => client.authenticate_password_credentials().await?,
        GrantType::ClientCredentials => client.authenticate_client_credentials().await?,
    };

    match outcome {
        GrantOutcome::Granted(token) => {
            println!("{}", serde_json::to_string_pretty(&token)?);
        }
        GrantOutcome::Denied(err) => {
            println!("{}", serde_json::to_string_pretty(&err)?);
        }
    }
    Ok(())
}

async fn check(config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };
    let client = EcoverseClient::new(config, AuthConfig::env_factory())?;
    client.authenticate(GrantType::ClientCredentials).await?;

    if client.test_connection().await {
        info!("connection ok");
    } else {
        anyhow::bail!("connection check failed");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args = AppCli::parse();
    match args.command {
        Commands::Token { flow } => acquire_token(flow).await?,
        Commands::Check { config } => check(config.as_deref()).await?,
    }

    Ok(())
}
