/**
 * Login Handler
 *
 * Implements POST /api/v1/auth/login.
 *
 * # Authentication Process
 *
 * 1. Decode the body and require email and password
 * 2. Look up the user by email
 * 3. Verify the password with bcrypt (an unknown email costs the same
 *    bcrypt work, so timing does not reveal whether an account exists)
 * 4. Issue a 24-hour session token
 * 5. Return the token and the public user fields
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same 401 response
 * - Passwords, tokens and submitted emails are never logged
 */

use axum::{body::Bytes, extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body or missing fields
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store integrity issue or token signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {"userId": "123e4567-e89b-12d3-a456-426614174000", "email": "ann@x.com", "name": "Ann"}
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let request: LoginRequest = serde_json::from_slice(&body)?;
    request.validate()?;

    let Some(user) = state.users.get_by_email(&request.email).await? else {
        state.hasher.verify_absent(&request.password).await;
        tracing::warn!("Login attempt for unknown account");
        return Err(ApiError::InvalidCredentials);
    };

    if !state.hasher.verify(&request.password, &user.password_hash).await {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id, &user.email)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
