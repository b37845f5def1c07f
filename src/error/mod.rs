//! HTTP Error Module
//!
//! This module defines the error type returned by every HTTP handler in the
//! service. Errors from lower layers (the user store, the password hasher,
//! the token issuer, JSON extraction) are converted into [`ApiError`] with
//! `From` so handlers can use `?` throughout.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Response Format
//!
//! Every error is rendered as JSON:
//!
//! ```json
//! { "error": "Invalid email or password", "status": 401 }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
