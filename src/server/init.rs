/**
 * Server Initialization
 *
 * Builds the application from configuration and runs it until shutdown.
 */

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::routes::create_router;
use crate::server::state::AppState;

/// Create the Axum application backed by a fresh in-memory user store
pub fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!(
        "Initializing auth service (issuer: {}, bcrypt cost: {})",
        config.issuer,
        config.bcrypt_cost
    );

    create_router(AppState::in_memory(config))
}

/// Bind to the configured address and serve until Ctrl-C or SIGTERM
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let app = create_app(&config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
