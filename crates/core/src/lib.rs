//! Shared domain types, errors, and pure logic for the Alarmist backend.
//!
//! Nothing in this crate touches storage or HTTP; it is consumed by both
//! `alarmist-db` and `alarmist-api`.

pub mod error;
pub mod pattern;
pub mod types;
pub mod validation;
