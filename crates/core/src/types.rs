/// Record and account identifiers are opaque strings (UUID v4 text form).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, globally unique record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}
