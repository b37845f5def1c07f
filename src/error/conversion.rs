/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, plus `From` conversions from the errors of
 * the lower layers so that handlers can propagate them with `?`.
 */

use axum::{
    http::{header::ALLOW, HeaderValue},
    response::{IntoResponse, Json, Response},
};

use crate::auth::password::HashError;
use crate::auth::sessions::TokenError;
use crate::error::types::ApiError;
use crate::store::StoreError;

impl IntoResponse for ApiError {
    /// Convert the error into a JSON response
    ///
    /// Server-side failures are logged here, and only here, before the detail
    /// is replaced by a generic message. A 405 carries an `Allow` header.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        if let Some(allow) = self
            .allowed_methods()
            .and_then(|methods| HeaderValue::from_str(&methods).ok())
        {
            response.headers_mut().insert(ALLOW, allow);
        }
        response
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        Self::InvalidBody
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailTaken => Self::EmailTaken,
            StoreError::ServerTaken => Self::ServerTaken,
            StoreError::Integrity { .. } => Self::Integrity,
        }
    }
}

impl From<HashError> for ApiError {
    fn from(err: HashError) -> Self {
        Self::internal(err)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self::internal(err)
    }
}
