/**
 * Wallet Auth Server Entry Point
 *
 * Loads configuration, installs tracing and serves the authentication API.
 */

use wallet_auth::config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "wallet_auth=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
    })?;
    tracing::debug!("Loaded configuration: {:?}", config);

    wallet_auth::server::run(config).await?;

    Ok(())
}
