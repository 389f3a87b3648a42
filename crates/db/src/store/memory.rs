//! Process-local implementations of the store traits.
//!
//! Each store keeps one `RwLock`-guarded map and holds the write lock for the
//! whole read-modify-write of a mutation, so every call is atomic with respect
//! to concurrent requests.

use std::collections::HashMap;

use alarmist_core::types::{RecordId, Timestamp};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{OwnedRecord, RecordStore, UserStore};
use crate::error::StoreError;
use crate::models::user::User;

/// In-memory [`RecordStore`]: owner id -> records in insertion order.
pub struct MemoryStore<T> {
    records: RwLock<HashMap<RecordId, Vec<T>>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: OwnedRecord> RecordStore<T> for MemoryStore<T> {
    async fn list(&self, owner_id: &str) -> Result<Vec<T>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .get(owner_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(&self, owner_id: &str, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .get(owner_id)
            .and_then(|list| list.iter().find(|r| r.id() == id))
            .cloned())
    }

    async fn insert(&self, record: T) -> Result<T, StoreError> {
        self.records
            .write()
            .await
            .entry(record.owner_id().to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        owner_id: &str,
        id: &str,
        apply: &(dyn for<'a> Fn(&'a T) -> T + Send + Sync),
    ) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        let Some(slot) = records
            .get_mut(owner_id)
            .and_then(|list| list.iter_mut().find(|r| r.id() == id))
        else {
            return Ok(None);
        };
        let updated = apply(&*slot);
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn remove(&self, owner_id: &str, id: &str) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        let Some(list) = records.get_mut(owner_id) else {
            return Ok(None);
        };
        Ok(list
            .iter()
            .position(|r| r.id() == id)
            .map(|index| list.remove(index)))
    }
}

/// In-memory [`UserStore`]: username -> account.
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate { field: "username" });
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn record_login(
        &self,
        username: &str,
        at: Timestamp,
    ) -> Result<Option<User>, StoreError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(username).map(|user| {
            user.last_login = Some(at);
            user.clone()
        }))
    }
}
