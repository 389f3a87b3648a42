/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert would break a uniqueness rule (e.g. a taken username).
    #[error("Duplicate value for unique field '{field}'")]
    Duplicate { field: &'static str },

    /// The backing store failed for a reason unrelated to the request.
    #[error("Storage backend error: {0}")]
    Backend(String),
}
