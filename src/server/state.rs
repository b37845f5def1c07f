/**
 * Application State
 *
 * `AppState` bundles the services every handler needs: the user store, the
 * server registry, the password hasher and the token issuer. It is cheap to
 * clone; the stores and issuer are shared behind `Arc`.
 *
 * The stores are injected as trait objects, so tests and alternative
 * deployments can supply their own backing implementations.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::password::PasswordHasher;
use crate::auth::sessions::TokenIssuer;
use crate::config::AppConfig;
use crate::store::{InMemoryServerStore, InMemoryUserStore, ServerStore, UserStore};

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub servers: Arc<dyn ServerStore>,
    pub hasher: PasswordHasher,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    /// State with the given user store and an empty in-memory server registry
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenIssuer) -> Self {
        Self {
            users,
            servers: Arc::new(InMemoryServerStore::new()),
            hasher,
            tokens: Arc::new(tokens),
        }
    }

    /// Replace the server registry
    pub fn with_servers(mut self, servers: Arc<dyn ServerStore>) -> Self {
        self.servers = servers;
        self
    }

    /// State backed by a fresh in-memory store, configured from `config`
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            PasswordHasher::new(config.bcrypt_cost),
            TokenIssuer::new(config.jwt_secret.as_bytes(), config.issuer.clone()),
        )
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
