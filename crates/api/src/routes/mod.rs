pub mod alarms;
pub mod auth;
pub mod calendar;
pub mod health;
pub mod patterns;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree. Every route requires a bearer token.
///
/// Route hierarchy:
///
/// ```text
/// /patterns                                        list, create
/// /patterns/{id}                                   get, update, delete
///
/// /calendar                                        list, create
/// /calendar/{id}                                   get, update, delete
///
/// /alarms                                          list, create
/// /alarms/{id}                                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/patterns", patterns::router())
        .nest("/calendar", calendar::router())
        .nest("/alarms", alarms::router())
}
