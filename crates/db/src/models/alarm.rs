//! Standalone alarm model and DTO.

use alarmist_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::OwnedRecord;

/// Sound used when an alarm request does not name one.
pub const DEFAULT_ALARM_SOUND: &str = "default";
/// Alarm volume (fraction of full) used when omitted.
pub const DEFAULT_ALARM_VOLUME: f64 = 1.0;
/// Alarm snooze length in minutes used when omitted.
pub const DEFAULT_ALARM_SNOOZE_MINUTES: i32 = 5;

/// A single dated alarm. Alarms are data only; nothing schedules them.
#[derive(Debug, Clone, Serialize)]
pub struct Alarm {
    pub id: RecordId,
    pub user_id: RecordId,
    pub date: String,
    pub time: String,
    pub is_active: bool,
    pub sound: String,
    /// Volume as a fraction, `0.0..=1.0`.
    pub volume: f64,
    /// Snooze length in minutes.
    pub snooze_duration: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OwnedRecord for Alarm {
    const ENTITY: &'static str = "Alarm";

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Request body for creating or replacing an alarm.
///
/// Client-supplied `id`, `user_id`, `created_at` and `updated_at` are
/// ignored; the server assigns them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AlarmInput {
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: String,
    #[validate(length(min = 1, message = "time must not be empty"))]
    pub time: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default = "default_sound")]
    pub sound: String,
    #[serde(default = "default_volume")]
    #[validate(range(min = 0.0, max = 1.0, message = "volume must be between 0.0 and 1.0"))]
    pub volume: f64,
    #[serde(default = "default_snooze")]
    #[validate(range(min = 0, message = "snooze_duration must not be negative"))]
    pub snooze_duration: i32,
}

fn default_is_active() -> bool {
    true
}

fn default_sound() -> String {
    DEFAULT_ALARM_SOUND.to_string()
}

fn default_volume() -> f64 {
    DEFAULT_ALARM_VOLUME
}

fn default_snooze() -> i32 {
    DEFAULT_ALARM_SNOOZE_MINUTES
}
