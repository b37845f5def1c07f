/**
 * Current User Handler
 *
 * Implements GET /api/v1/auth/me: resolves the bearer token's user and
 * returns its public fields.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing, invalid or expired token, or the token's
///   user is unknown to this process (the store does not survive restarts)
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = auth.user_id()?;

    let user = state.users.get_by_id(user_id).await?.ok_or_else(|| {
        tracing::warn!("Token refers to unknown user: {}", user_id);
        ApiError::Unauthorized
    })?;

    Ok(Json(UserResponse::from(&user)))
}
