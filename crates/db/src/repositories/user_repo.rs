//! Repository for user accounts.

use alarmist_core::types::new_record_id;
use chrono::Utc;

use crate::error::StoreError;
use crate::models::user::{CreateUser, User};
use crate::Database;

/// Provides create and lookup operations for accounts.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new account with a fresh id and `created_at = now`.
    ///
    /// Fails with [`StoreError::Duplicate`] if the username is taken.
    pub async fn create(db: &Database, input: CreateUser) -> Result<User, StoreError> {
        let user = User {
            id: new_record_id(),
            username: input.username,
            email: input.email,
            password_hash: input.password_hash,
            created_at: Utc::now(),
            last_login: None,
        };
        db.users.insert(user).await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        db: &Database,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        db.users.find_by_username(username).await
    }

    /// Stamp `last_login = now`. Returns `None` if the account is gone.
    pub async fn record_successful_login(
        db: &Database,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        db.users.record_login(username, Utc::now()).await
    }
}
