//! Repository for standalone alarms.

use alarmist_core::types::new_record_id;
use chrono::Utc;

use super::next_updated_at;
use crate::error::StoreError;
use crate::models::alarm::{Alarm, AlarmInput};
use crate::Database;

/// Provides owner-scoped CRUD operations for alarms.
pub struct AlarmRepo;

impl AlarmRepo {
    pub async fn list(db: &Database, owner_id: &str) -> Result<Vec<Alarm>, StoreError> {
        db.alarms.list(owner_id).await
    }

    pub async fn create(
        db: &Database,
        owner_id: &str,
        input: &AlarmInput,
    ) -> Result<Alarm, StoreError> {
        let now = Utc::now();
        let alarm = Alarm {
            id: new_record_id(),
            user_id: owner_id.to_string(),
            date: input.date.clone(),
            time: input.time.clone(),
            is_active: input.is_active,
            sound: input.sound.clone(),
            volume: input.volume,
            snooze_duration: input.snooze_duration,
            created_at: now,
            updated_at: now,
        };
        db.alarms.insert(alarm).await
    }

    pub async fn find_by_id(
        db: &Database,
        owner_id: &str,
        id: &str,
    ) -> Result<Option<Alarm>, StoreError> {
        db.alarms.get(owner_id, id).await
    }

    /// Replace every client-editable field of an alarm.
    pub async fn update(
        db: &Database,
        owner_id: &str,
        id: &str,
        input: &AlarmInput,
    ) -> Result<Option<Alarm>, StoreError> {
        db.alarms
            .update(owner_id, id, &|existing: &Alarm| Alarm {
                id: existing.id.clone(),
                user_id: existing.user_id.clone(),
                date: input.date.clone(),
                time: input.time.clone(),
                is_active: input.is_active,
                sound: input.sound.clone(),
                volume: input.volume,
                snooze_duration: input.snooze_duration,
                created_at: existing.created_at,
                updated_at: next_updated_at(existing.updated_at),
            })
            .await
    }

    pub async fn delete(db: &Database, owner_id: &str, id: &str) -> Result<bool, StoreError> {
        Ok(db.alarms.remove(owner_id, id).await?.is_some())
    }
}
