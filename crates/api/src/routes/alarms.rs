//! Route definitions for the `/alarms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::alarms;
use crate::state::AppState;

/// Routes mounted at `/api/alarms`.
///
/// ```text
/// GET    /        -> list_alarms
/// POST   /        -> create_alarm
/// GET    /{id}    -> get_alarm
/// PUT    /{id}    -> update_alarm
/// DELETE /{id}    -> delete_alarm
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alarms::list_alarms).post(alarms::create_alarm))
        .route(
            "/{id}",
            get(alarms::get_alarm)
                .put(alarms::update_alarm)
                .delete(alarms::delete_alarm),
        )
}
