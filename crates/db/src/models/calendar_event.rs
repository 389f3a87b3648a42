//! Calendar event model and DTO.

use alarmist_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::OwnedRecord;

/// Assignment of a pattern to a calendar date.
///
/// `pattern_id` is a plain reference: it is not checked on write and is left
/// dangling if the pattern is deleted.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: RecordId,
    pub user_id: RecordId,
    pub pattern_id: RecordId,
    pub date: String,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OwnedRecord for CalendarEvent {
    const ENTITY: &'static str = "Calendar event";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Request body for creating or replacing a calendar event.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalendarEventInput {
    pub pattern_id: RecordId,
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: String,
    pub note: Option<String>,
}
