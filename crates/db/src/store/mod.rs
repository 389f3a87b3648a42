//! Storage abstraction used by the repositories.
//!
//! - [`RecordStore`] -- owner-scoped collections of records (patterns,
//!   calendar events, alarms).
//! - [`UserStore`] -- the account directory, keyed by username.
//! - [`memory`] -- in-memory implementations of both.

pub mod memory;

use alarmist_core::types::Timestamp;
use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::user::User;

/// A record that belongs to exactly one account.
pub trait OwnedRecord: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in not-found messages.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
    fn owner_id(&self) -> &str;
}

/// Owner-scoped record collection.
///
/// Every lookup is keyed by the owner first: a record id that exists under a
/// different owner behaves exactly like an id that does not exist at all.
#[async_trait]
pub trait RecordStore<T: OwnedRecord>: Send + Sync {
    /// All records of `owner_id`, in insertion order.
    async fn list(&self, owner_id: &str) -> Result<Vec<T>, StoreError>;

    /// The record with `id` owned by `owner_id`, if any.
    async fn get(&self, owner_id: &str, id: &str) -> Result<Option<T>, StoreError>;

    /// Append `record` to its owner's collection.
    async fn insert(&self, record: T) -> Result<T, StoreError>;

    /// Replace the matching record with `apply(&existing)`, keeping its
    /// position. Returns `None` when nothing matched.
    async fn update(
        &self,
        owner_id: &str,
        id: &str,
        apply: &(dyn for<'a> Fn(&'a T) -> T + Send + Sync),
    ) -> Result<Option<T>, StoreError>;

    /// Remove the matching record, returning it. `None` when nothing matched.
    async fn remove(&self, owner_id: &str, id: &str) -> Result<Option<T>, StoreError>;
}

/// Account directory keyed by (case-sensitive) username.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account.
    ///
    /// Fails with [`StoreError::Duplicate`] if the username is already taken;
    /// the check and the insert happen atomically.
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Set `last_login` on the named account, returning the updated row.
    async fn record_login(
        &self,
        username: &str,
        at: Timestamp,
    ) -> Result<Option<User>, StoreError>;
}
