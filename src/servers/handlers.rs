/**
 * Server Registry Handlers
 *
 * Implements the /api/v1/servers endpoints. All of them take the caller from
 * the `AuthUser` extractor, so a missing or invalid token is rejected with
 * 401 before the body is read.
 */

use std::net::IpAddr;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;
use crate::servers::types::{AddServerRequest, ServerStatus};
use crate::servers::Server;

/// Add server handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, missing fields or invalid address
/// * `401 Unauthorized` - missing or invalid token
/// * `409 Conflict` - address already registered
pub async fn add_server(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<Server>), ApiError> {
    let owner = auth.user_id()?;
    let request: AddServerRequest = serde_json::from_slice(&body)?;
    let ip = request.validate()?;

    let server = Server::new(request.name, ip, owner);
    state.servers.add(server.clone()).await?;

    tracing::info!("Server {} registered by {}", server.ip, owner);

    Ok((StatusCode::CREATED, Json(server)))
}

/// List servers handler
pub async fn list_servers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Server>>, ApiError> {
    Ok(Json(state.servers.list().await?))
}

/// Server status handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - no server with this address (including strings that
///   are not addresses at all)
pub async fn server_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(ip): Path<String>,
) -> Result<Json<ServerStatus>, ApiError> {
    let ip: IpAddr = ip.parse().map_err(|_| ApiError::ServerNotFound)?;

    let server = state
        .servers
        .get_by_ip(ip)
        .await?
        .ok_or(ApiError::ServerNotFound)?;

    Ok(Json(ServerStatus::from(&server)))
}
