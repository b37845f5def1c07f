/**
 * Router Configuration
 *
 * Assembles the full application router:
 *
 * 1. `GET /` - static welcome message
 * 2. API routes (see `api_routes`)
 * 3. Fallback - 404 JSON error for every other path
 *
 * Every request is wrapped in a `tower_http` trace span.
 */

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::{configure_api_routes, only_get};
use crate::server::state::AppState;

/// Body of `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the Wallet App Backend!";

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(welcome).fallback(only_get));

    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
