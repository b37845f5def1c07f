//! Common test utilities and helpers
//!
//! Shared by every integration test target:
//! - `app` - a fresh router and store per test
//! - `auth_helpers` - user fixtures and token helpers
//! - `assertions` - custom assertion macros
#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
