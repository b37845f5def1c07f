//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types, input validation
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/v1/auth/register
//! - **`login`** - POST /api/v1/auth/login
//! - **`get_me`** - GET /api/v1/auth/me

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

pub use login::login;
pub use me::get_me;
pub use register::register;
