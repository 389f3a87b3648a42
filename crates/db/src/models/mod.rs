//! Entity models and request DTOs, one module per resource.

pub mod alarm;
pub mod calendar_event;
pub mod pattern;
pub mod user;
