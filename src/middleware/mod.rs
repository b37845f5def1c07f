//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - the `AuthUser` bearer-token extractor for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::response::Json;
//! use wallet_auth::middleware::AuthUser;
//!
//! async fn whoami(AuthUser(claims): AuthUser) -> Json<String> {
//!     Json(claims.email)
//! }
//! ```

pub mod auth;

pub use auth::{bearer_token, AuthUser};
