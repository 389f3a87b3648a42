//! Repository for alarm patterns.

use alarmist_core::pattern::normalize_times;
use alarmist_core::types::new_record_id;
use chrono::Utc;

use super::next_updated_at;
use crate::error::StoreError;
use crate::models::pattern::{Pattern, PatternInput};
use crate::Database;

/// Provides owner-scoped CRUD operations for patterns.
pub struct PatternRepo;

impl PatternRepo {
    /// All patterns of `owner_id`, oldest first.
    pub async fn list(db: &Database, owner_id: &str) -> Result<Vec<Pattern>, StoreError> {
        db.patterns.list(owner_id).await
    }

    /// Create a pattern owned by `owner_id`, filling in time defaults.
    pub async fn create(
        db: &Database,
        owner_id: &str,
        input: &PatternInput,
    ) -> Result<Pattern, StoreError> {
        let now = Utc::now();
        let pattern = Pattern {
            id: new_record_id(),
            user_id: owner_id.to_string(),
            name: input.name.clone(),
            description: input.description.clone(),
            color: input.color.clone(),
            times: normalize_times(&input.times),
            created_at: now,
            updated_at: now,
        };
        db.patterns.insert(pattern).await
    }

    pub async fn find_by_id(
        db: &Database,
        owner_id: &str,
        id: &str,
    ) -> Result<Option<Pattern>, StoreError> {
        db.patterns.get(owner_id, id).await
    }

    /// Replace every client-editable field of a pattern.
    ///
    /// Returns `None` if `owner_id` has no pattern with this `id`.
    pub async fn update(
        db: &Database,
        owner_id: &str,
        id: &str,
        input: &PatternInput,
    ) -> Result<Option<Pattern>, StoreError> {
        let times = normalize_times(&input.times);
        db.patterns
            .update(owner_id, id, &|existing: &Pattern| Pattern {
                id: existing.id.clone(),
                user_id: existing.user_id.clone(),
                name: input.name.clone(),
                description: input.description.clone(),
                color: input.color.clone(),
                times: times.clone(),
                created_at: existing.created_at,
                updated_at: next_updated_at(existing.updated_at),
            })
            .await
    }

    /// Delete a pattern. Returns `true` if a pattern was removed.
    ///
    /// Calendar events that reference it are left untouched.
    pub async fn delete(db: &Database, owner_id: &str, id: &str) -> Result<bool, StoreError> {
        Ok(db.patterns.remove(owner_id, id).await?.is_some())
    }
}
