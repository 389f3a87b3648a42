//! Alarm pattern ring-time value objects and default filling.
//!
//! A pattern's times arrive from clients as partial entries ([`PatternTimeInput`])
//! and are stored as fully populated [`PatternTime`] values. Both create and
//! update go through [`normalize_times`] so the defaults live in one place.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sound played when a time entry does not name one.
pub const DEFAULT_SOUND: &str = "default";
/// Volume (percent) used when a time entry omits it.
pub const DEFAULT_VOLUME: i32 = 100;
/// Snooze length in minutes used when a time entry omits it.
pub const DEFAULT_SNOOZE_MINUTES: i32 = 5;

/// One ring-time inside a stored pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTime {
    /// Time of day, e.g. `"07:00"`.
    pub time: String,
    pub sound: String,
    /// Volume in percent, `0..=100`.
    pub volume: i32,
    pub gradual_increase: bool,
    /// Snooze length in minutes.
    pub snooze_duration: i32,
}

/// A ring-time as submitted by a client. Only `time` is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatternTimeInput {
    #[validate(length(min = 1, message = "time must not be empty"))]
    pub time: String,
    pub sound: Option<String>,
    #[validate(range(min = 0, max = 100, message = "volume must be between 0 and 100"))]
    pub volume: Option<i32>,
    pub gradual_increase: Option<bool>,
    #[validate(range(min = 0, message = "snooze_duration must not be negative"))]
    pub snooze_duration: Option<i32>,
}

/// Fill in defaults for every omitted field of a single time entry.
pub fn normalize_time(input: &PatternTimeInput) -> PatternTime {
    PatternTime {
        time: input.time.clone(),
        sound: input
            .sound
            .clone()
            .unwrap_or_else(|| DEFAULT_SOUND.to_string()),
        volume: input.volume.unwrap_or(DEFAULT_VOLUME),
        gradual_increase: input.gradual_increase.unwrap_or(false),
        snooze_duration: input.snooze_duration.unwrap_or(DEFAULT_SNOOZE_MINUTES),
    }
}

/// Normalize a list of time entries, preserving their order.
pub fn normalize_times(inputs: &[PatternTimeInput]) -> Vec<PatternTime> {
    inputs.iter().map(normalize_time).collect()
}
