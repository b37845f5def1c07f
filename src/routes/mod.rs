//! Route Configuration Module
//!
//! Configures all HTTP routes for the service.
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Authentication and server registry endpoints
//!
//! # Routes
//!
//! - `GET /` - Welcome message
//! - `POST /api/v1/auth/register` - User registration
//! - `POST /api/v1/auth/login` - User login
//! - `GET /api/v1/auth/me` - Current user
//! - `POST /api/v1/servers` - Register a server
//! - `GET /api/v1/servers` - List servers
//! - `GET /api/v1/servers/{ip}` - Server status
//!
//! Wrong methods on known paths return 405; unknown paths return 404.

/// Main router creation
pub mod router;

/// Authentication and server registry endpoints
pub mod api_routes;

pub use router::{create_router, WELCOME_MESSAGE};
