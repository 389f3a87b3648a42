//! Route definitions for the `/patterns` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::patterns;
use crate::state::AppState;

/// Routes mounted at `/api/patterns`.
///
/// ```text
/// GET    /        -> list_patterns
/// POST   /        -> create_pattern
/// GET    /{id}    -> get_pattern
/// PUT    /{id}    -> update_pattern
/// DELETE /{id}    -> delete_pattern
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(patterns::list_patterns).post(patterns::create_pattern),
        )
        .route(
            "/{id}",
            get(patterns::get_pattern)
                .put(patterns::update_pattern)
                .delete(patterns::delete_pattern),
        )
}
