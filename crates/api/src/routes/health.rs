use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
    version: &'static str,
    /// Where records are kept; always `"memory"` for now.
    storage: &'static str,
    token_ttl_mins: i64,
}

/// GET /health -- unauthenticated liveness probe.
async fn liveness(State(state): State<AppState>) -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: "memory",
        token_ttl_mins: state.config.jwt.access_token_expiry_mins,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}
