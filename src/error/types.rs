/**
 * API Error Types
 *
 * The error taxonomy of the authentication service. Each variant maps to a
 * single HTTP status code:
 *
 * - client input errors (malformed body, missing fields, weak password) - 400
 * - authentication failures (unknown email or wrong password) - 401
 * - duplicate email or server address - 409
 * - wrong method - 405
 * - unknown path or server - 404
 * - integrity violations and other internal failures - 500
 *
 * Authentication failures are collapsed into one variant so that responses
 * never reveal whether an email is registered.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::users::MIN_PASSWORD_LENGTH;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be decoded as the expected JSON document.
    #[error("Invalid request body")]
    InvalidBody,

    /// One or more required fields were absent or empty.
    #[error("{0}")]
    MissingFields(&'static str),

    /// A field is present but has an unusable value.
    #[error("{0}")]
    InvalidField(&'static str),

    /// The supplied password is too short.
    #[error("Password must be at least {} characters long", MIN_PASSWORD_LENGTH)]
    WeakPassword,

    /// Another account already uses this email address.
    #[error("Email already exists")]
    EmailTaken,

    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed or expired bearer token.
    #[error("Missing or invalid bearer token")]
    Unauthorized,

    /// The route exists but does not accept this method. Carries the
    /// methods it does accept.
    #[error("Only {} method is allowed", .0.join(" or "))]
    MethodNotAllowed(&'static [&'static str]),

    /// No route matches the request path.
    #[error("Not found")]
    NotFound,

    /// No registered server has this address.
    #[error("Server not found")]
    ServerNotFound,

    /// A server with this address is already registered.
    #[error("Server already registered")]
    ServerTaken,

    /// The email index references a user record that does not exist.
    #[error("User data integrity issue")]
    Integrity,

    /// Any other server-side failure. The detail is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create an internal error from any displayable cause
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(cause.to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody
            | Self::MissingFields(_)
            | Self::InvalidField(_)
            | Self::WeakPassword => StatusCode::BAD_REQUEST,
            Self::EmailTaken | Self::ServerTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound | Self::ServerNotFound => StatusCode::NOT_FOUND,
            Self::Integrity | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Methods to advertise in the `Allow` header of a 405 response
    pub fn allowed_methods(&self) -> Option<String> {
        match self {
            Self::MethodNotAllowed(methods) => Some(methods.join(", ")),
            _ => None,
        }
    }

    /// Get the message sent to the client
    ///
    /// Internal failures are reported with a generic message; the cause is
    /// only available through `Display`.
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingFields("Email and password are required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::WeakPassword.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::MethodNotAllowed(&["POST"]).status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ServerNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::ServerTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::InvalidField("Invalid IP address").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Integrity.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_weak_password_message_names_minimum() {
        assert_eq!(
            ApiError::WeakPassword.message(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let error = ApiError::internal("bcrypt worker panicked");
        assert_eq!(error.message(), "Internal server error");
        assert!(error.to_string().contains("bcrypt worker panicked"));
    }

    #[test]
    fn test_method_not_allowed_message() {
        assert_eq!(
            ApiError::MethodNotAllowed(&["GET"]).message(),
            "Only GET method is allowed"
        );
        assert_eq!(
            ApiError::MethodNotAllowed(&["GET", "POST"]).message(),
            "Only GET or POST method is allowed"
        );
    }

    #[test]
    fn test_allowed_methods() {
        assert_eq!(
            ApiError::MethodNotAllowed(&["GET", "POST"]).allowed_methods().as_deref(),
            Some("GET, POST")
        );
        assert_eq!(ApiError::NotFound.allowed_methods(), None);
    }
}
