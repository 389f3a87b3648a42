//! Repository for calendar events.

use alarmist_core::types::new_record_id;
use chrono::Utc;

use super::next_updated_at;
use crate::error::StoreError;
use crate::models::calendar_event::{CalendarEvent, CalendarEventInput};
use crate::Database;

/// Provides owner-scoped CRUD operations for calendar events.
pub struct CalendarEventRepo;

impl CalendarEventRepo {
    pub async fn list(db: &Database, owner_id: &str) -> Result<Vec<CalendarEvent>, StoreError> {
        db.calendar_events.list(owner_id).await
    }

    /// Create an event. The referenced pattern is not checked for existence.
    pub async fn create(
        db: &Database,
        owner_id: &str,
        input: &CalendarEventInput,
    ) -> Result<CalendarEvent, StoreError> {
        let now = Utc::now();
        let event = CalendarEvent {
            id: new_record_id(),
            user_id: owner_id.to_string(),
            pattern_id: input.pattern_id.clone(),
            date: input.date.clone(),
            note: input.note.clone(),
            created_at: now,
            updated_at: now,
        };
        db.calendar_events.insert(event).await
    }

    pub async fn find_by_id(
        db: &Database,
        owner_id: &str,
        id: &str,
    ) -> Result<Option<CalendarEvent>, StoreError> {
        db.calendar_events.get(owner_id, id).await
    }

    /// Replace an event's pattern, date and note.
    pub async fn update(
        db: &Database,
        owner_id: &str,
        id: &str,
        input: &CalendarEventInput,
    ) -> Result<Option<CalendarEvent>, StoreError> {
        db.calendar_events
            .update(owner_id, id, &|existing: &CalendarEvent| CalendarEvent {
                id: existing.id.clone(),
                user_id: existing.user_id.clone(),
                pattern_id: input.pattern_id.clone(),
                date: input.date.clone(),
                note: input.note.clone(),
                created_at: existing.created_at,
                updated_at: next_updated_at(existing.updated_at),
            })
            .await
    }

    pub async fn delete(db: &Database, owner_id: &str, id: &str) -> Result<bool, StoreError> {
        Ok(db.calendar_events.remove(owner_id, id).await?.is_some())
    }
}
