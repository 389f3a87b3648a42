//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Database` as the first argument. Record repositories are
//! always scoped to an owner id.

pub mod alarm_repo;
pub mod calendar_event_repo;
pub mod pattern_repo;
pub mod user_repo;

pub use alarm_repo::AlarmRepo;
pub use calendar_event_repo::CalendarEventRepo;
pub use pattern_repo::PatternRepo;
pub use user_repo::UserRepo;

use alarmist_core::types::Timestamp;
use chrono::Utc;

/// Timestamp for a record being rewritten: now, but never earlier than the
/// previous `updated_at` (guards against wall-clock steps backwards).
fn next_updated_at(previous: Timestamp) -> Timestamp {
    Utc::now().max(previous)
}
