/**
 * API Routes
 *
 * Authentication endpoints under /api/v1/auth:
 *
 * - `POST /api/v1/auth/register` - User registration
 * - `POST /api/v1/auth/login` - User login
 * - `GET /api/v1/auth/me` - Current user (requires bearer token)
 *
 * Server registry endpoints under /api/v1/servers (bearer token required):
 *
 * - `POST /api/v1/servers` - Register a server
 * - `GET /api/v1/servers` - List registered servers
 * - `GET /api/v1/servers/{ip}` - Status of one server
 *
 * Any other method on these paths gets a 405 JSON error with an `Allow`
 * header.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::{get_me, login, register};
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::servers::{add_server, list_servers, server_status};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/v1/auth/register",
            post(register).fallback(only_post),
        )
        .route(
            "/api/v1/auth/login",
            post(login).fallback(only_post),
        )
        .route(
            "/api/v1/auth/me",
            get(get_me).fallback(only_get),
        )
        .route(
            "/api/v1/servers",
            get(list_servers).post(add_server).fallback(get_or_post),
        )
        .route(
            "/api/v1/servers/{ip}",
            get(server_status).fallback(only_get),
        )
}

pub(crate) async fn only_post() -> ApiError {
    ApiError::MethodNotAllowed(&["POST"])
}

pub(crate) async fn only_get() -> ApiError {
    ApiError::MethodNotAllowed(&["GET"])
}

async fn get_or_post() -> ApiError {
    ApiError::MethodNotAllowed(&["GET", "POST"])
}
