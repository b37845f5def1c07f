/**
 * Registration Handler
 *
 * Implements POST /api/v1/auth/register.
 *
 * # Registration Process
 *
 * 1. Decode the body as JSON whatever its content type (400 if malformed)
 * 2. Require name, email and password (400)
 * 3. Require a password of at least 8 characters (400)
 * 4. Reject an email that is already registered (409)
 * 5. Hash the password and store the new user
 * 6. Return the public user fields with 201 Created
 *
 * The store's insert is atomic, so two concurrent registrations for one
 * email still produce exactly one user; the loser gets 409.
 */

use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::users::User;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, missing fields or short password
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - password hashing failed
///
/// # Example Request
///
/// ```http
/// POST /api/v1/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Ann", "email": "ann@x.com", "password": "longpassword"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"userId": "123e4567-e89b-12d3-a456-426614174000", "email": "ann@x.com", "name": "Ann"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let request: RegisterRequest = serde_json::from_slice(&body)?;
    request.validate()?;

    // Skip the hashing cost for obvious duplicates; insert() has the final word.
    if state.users.email_exists(&request.email).await? {
        tracing::warn!("Registration rejected: email already registered");
        return Err(ApiError::EmailTaken);
    }

    let password_hash = state.hasher.hash(&request.password).await?;
    let user = User::new(request.name, request.email, password_hash);

    if let Err(e) = state.users.insert(user.clone()).await {
        tracing::warn!("Failed to store user {}: {}", user.id, e);
        return Err(e.into());
    }

    tracing::info!("User registered: {}", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
