//! Server Module
//!
//! Application state and server startup.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - app creation and the serve loop
//!
//! # Example
//!
//! ```rust,no_run
//! use wallet_auth::config::AppConfig;
//! use wallet_auth::server::run;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! run(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use init::{create_app, run};
pub use state::AppState;
