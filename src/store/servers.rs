/**
 * In-Memory Server Registry
 *
 * Registered servers in insertion order, behind one `RwLock`. Lookups scan
 * the list; a registry is expected to hold a handful of entries.
 */

use std::net::IpAddr;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::servers::Server;
use crate::store::{ServerStore, StoreError};

/// Process-lifetime server registry
#[derive(Debug, Default)]
pub struct InMemoryServerStore {
    servers: RwLock<Vec<Server>>,
}

impl InMemoryServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered servers
    pub async fn len(&self) -> usize {
        self.servers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ServerStore for InMemoryServerStore {
    async fn add(&self, server: Server) -> Result<(), StoreError> {
        let mut servers = self.servers.write().await;
        if servers.iter().any(|existing| existing.ip == server.ip) {
            return Err(StoreError::ServerTaken);
        }

        servers.push(server);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Server>, StoreError> {
        Ok(self.servers.read().await.clone())
    }

    async fn get_by_ip(&self, ip: IpAddr) -> Result<Option<Server>, StoreError> {
        Ok(self
            .servers
            .read()
            .await
            .iter()
            .find(|server| server.ip == ip)
            .cloned())
    }
}
