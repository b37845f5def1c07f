/**
 * Bearer Token Authentication
 *
 * `AuthUser` is an axum extractor for routes that require a session token.
 * It reads the `Authorization: Bearer <token>` header, verifies the token
 * with the application's `TokenIssuer` and exposes the verified claims.
 * Any failure rejects the request with 401 Unauthorized.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use uuid::Uuid;

use crate::auth::sessions::{Claims, TokenIssuer};
use crate::error::ApiError;

/// Verified claims of the request's bearer token
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The authenticated user's id; 401 if the subject is not a UUID
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        self.0.user_uuid().map_err(|e| {
            tracing::warn!("Rejected token claims: {}", e);
            ApiError::Unauthorized
        })
    }
}

/// Extract the raw token from an `Authorization: Bearer` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<TokenIssuer>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::Unauthorized
        })?;

        let issuer = Arc::<TokenIssuer>::from_ref(state);
        let claims = issuer.verify(token).map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            ApiError::Unauthorized
        })?;

        Ok(AuthUser(claims))
    }
}
