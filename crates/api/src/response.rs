//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by endpoints that have no record to
/// echo back, such as deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
