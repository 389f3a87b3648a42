//! Alarm pattern model and DTO.
//!
//! A pattern is a named, colored set of ring-times that calendar events can
//! assign to a date.

use alarmist_core::pattern::{PatternTime, PatternTimeInput};
use alarmist_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::OwnedRecord;

/// A stored alarm pattern.
#[derive(Debug, Clone, Serialize)]
pub struct Pattern {
    pub id: RecordId,
    pub user_id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub times: Vec<PatternTime>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OwnedRecord for Pattern {
    const ENTITY: &'static str = "Pattern";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Request body for creating or fully replacing a pattern.
///
/// Any `id` or `user_id` the client sends is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PatternInput {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    #[validate(nested)]
    pub times: Vec<PatternTimeInput>,
}
