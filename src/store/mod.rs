//! Storage Ports
//!
//! The storage ports for user records and for the server registry. Handlers
//! only see the [`UserStore`] and [`ServerStore`] traits through `AppState`,
//! so any backing implementation can be injected: [`InMemoryUserStore`] and
//! [`InMemoryServerStore`] are used by the server and by the tests.
//!
//! # Uniqueness
//!
//! Email uniqueness is enforced by [`UserStore::insert`], which must insert the
//! record and index its email as one atomic step, or fail with
//! [`StoreError::EmailTaken`] and leave the store untouched. Callers may still
//! use [`UserStore::email_exists`] as a cheap early check, but it is not the
//! source of truth.

use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::users::User;
use crate::servers::Server;

/// In-memory user store
pub mod memory;

/// In-memory server registry
pub mod servers;

pub use memory::InMemoryUserStore;
pub use servers::InMemoryServerStore;

/// Errors returned by a [`UserStore`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Another record already indexes this email.
    #[error("email already registered")]
    EmailTaken,

    /// Another server is already registered under this address.
    #[error("server address already registered")]
    ServerTaken,

    /// The email index points at a record that does not exist.
    #[error("email index entry for {email} has no user record")]
    Integrity {
        /// The email whose index entry is dangling
        email: String,
    },
}

/// Persistence port for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user and index its email, unless the email is already indexed.
    async fn insert(&self, user: User) -> Result<(), StoreError>;

    /// Fetch a user by identifier.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Fetch a user by email.
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Whether any user is indexed under this email.
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;
}

/// Persistence port for registered servers
///
/// Servers are keyed by address; listing returns them in registration order.
#[async_trait]
pub trait ServerStore: Send + Sync {
    /// Register a server, unless its address is already registered.
    async fn add(&self, server: Server) -> Result<(), StoreError>;

    /// All registered servers, oldest first.
    async fn list(&self) -> Result<Vec<Server>, StoreError>;

    /// Fetch a server by address.
    async fn get_by_ip(&self, ip: IpAddr) -> Result<Option<Server>, StoreError>;
}
