use alarmist_core::error::CoreError;
use alarmist_db::error::StoreError;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Message sent in place of any 500-class detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error returned by every handler and extractor.
///
/// Renders as `{"error": <message>, "code": <CODE>}`. Internal details are
/// logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    /// HTTP status, machine-readable code, and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{entity} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            // A taken username is a plain 400 for existing clients.
            AppError::Core(CoreError::Conflict(msg)) => {
                (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone())
            }
            AppError::Core(CoreError::InvalidCredential(msg)) => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", msg.clone())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Store(StoreError::Duplicate { field }) => (
                StatusCode::BAD_REQUEST,
                "CONFLICT",
                format!("Duplicate value for {field}"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Core(CoreError::Internal(detail))
            | AppError::Store(StoreError::Backend(detail))
            | AppError::InternalError(detail) => {
                tracing::error!(error = %detail, kind = self.kind(), "Request failed internally");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::Core(_) => "core",
            AppError::Store(_) => "store",
            AppError::BadRequest(_) => "request",
            AppError::InternalError(_) => "handler",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        let mut response = (status, Json(ErrorBody { error, code })).into_response();

        // Every 401 carries the bearer challenge, as OAuth2 clients expect.
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
