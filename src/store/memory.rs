/**
 * In-Memory User Store
 *
 * Holds user records for the lifetime of the process. Both the primary map
 * and the email index live behind one `RwLock`, so they are always read and
 * modified together.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::users::User;
use crate::store::{StoreError, UserStore};

#[derive(Debug, Default)]
struct Records {
    users: HashMap<Uuid, User>,
    email_index: HashMap<String, Uuid>,
}

/// Process-lifetime user store
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: RwLock<Records>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.records.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.email_index.contains_key(&user.email) {
            return Err(StoreError::EmailTaken);
        }

        records.email_index.insert(user.email.clone(), user.id);
        records.users.insert(user.id, user);
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.records.read().await.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let records = self.records.read().await;
        let Some(id) = records.email_index.get(email) else {
            return Ok(None);
        };

        records
            .users
            .get(id)
            .cloned()
            .map(Some)
            .ok_or_else(|| StoreError::Integrity {
                email: email.to_string(),
            })
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.records.read().await.email_index.contains_key(email))
    }
}
