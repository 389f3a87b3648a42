use crate::types::RecordId;

/// Domain failures shared by the store and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The record does not exist for the acting account. A record owned by
    /// someone else is reported the same way.
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: RecordId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated, e.g. a username already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad login, or a token that is malformed, tampered with, or expired.
    #[error("Invalid credentials: {0}")]
    InvalidCredential(String),

    /// No usable credentials were presented.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
