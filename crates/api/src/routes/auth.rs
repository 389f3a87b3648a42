//! Route definitions for account and token endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /register        -> register
/// POST /token           -> login (form-encoded)
/// GET  /validate-token  -> validate_token (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/token", post(auth::login))
        .route("/validate-token", get(auth::validate_token))
}
