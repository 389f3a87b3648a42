pub mod alarms;
pub mod auth;
pub mod calendar;
pub mod patterns;
