//! Wallet Auth - Authentication Backend
//!
//! A small HTTP/JSON service providing user registration and login, plus a
//! registry of managed servers for signed-in users. Everything lives in
//! in-memory stores for the lifetime of the process; successful logins
//! receive a signed, 24-hour session token.
//!
//! # Module Structure
//!
//! - **`auth`** - user record, password hashing, session tokens, handlers
//! - **`servers`** - server registry record and handlers
//! - **`store`** - the `UserStore` and `ServerStore` ports and their in-memory implementations
//! - **`routes`** - router assembly
//! - **`middleware`** - bearer-token extractor
//! - **`server`** - application state and startup
//! - **`config`** - configuration loading
//! - **`error`** - HTTP error type
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/api/v1/auth/register` | 201 `{userId, email, name}` |
//! | POST | `/api/v1/auth/login` | 200 `{token, user}` |
//! | GET | `/api/v1/auth/me` | 200 `{userId, email, name}` |
//! | POST | `/api/v1/servers` | 201 `{name, ip, addedBy, addedAt}` |
//! | GET | `/api/v1/servers` | 200 list of servers |
//! | GET | `/api/v1/servers/{ip}` | 200 `{ip, name, status, addedAt}` |
//! | GET | `/` | 200 welcome text |
//!
//! # Usage
//!
//! ```rust,no_run
//! use wallet_auth::config::AppConfig;
//! use wallet_auth::server::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config);
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod servers;
pub mod store;

pub use config::AppConfig;
pub use error::ApiError;
pub use server::{create_app, AppState};
