//! Handlers for the `/calendar` resource.

use alarmist_core::error::CoreError;
use alarmist_core::validation::validate_input;
use alarmist_db::models::calendar_event::{CalendarEvent, CalendarEventInput};
use alarmist_db::repositories::CalendarEventRepo;
use alarmist_db::store::OwnedRecord;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/calendar
pub async fn list_events(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let events = CalendarEventRepo::list(&state.db, auth.id()).await?;
    Ok(Json(events))
}

/// POST /api/calendar
///
/// The referenced pattern is not required to exist.
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CalendarEventInput>,
) -> AppResult<Json<CalendarEvent>> {
    validate_input(&input)?;

    let event = CalendarEventRepo::create(&state.db, auth.id(), &input).await?;

    tracing::info!(
        event_id = %event.id,
        pattern_id = %event.pattern_id,
        date = %event.date,
        user_id = %auth.id(),
        "Calendar event created",
    );

    Ok(Json(event))
}

/// GET /api/calendar/{id}
pub async fn get_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<CalendarEvent>> {
    CalendarEventRepo::find_by_id(&state.db, auth.id(), &event_id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(event_id))
}

/// PUT /api/calendar/{id}
pub async fn update_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(input): Json<CalendarEventInput>,
) -> AppResult<Json<CalendarEvent>> {
    validate_input(&input)?;

    let event = CalendarEventRepo::update(&state.db, auth.id(), &event_id, &input)
        .await?
        .ok_or_else(|| not_found(event_id))?;

    tracing::info!(event_id = %event.id, user_id = %auth.id(), "Calendar event updated");

    Ok(Json(event))
}

/// DELETE /api/calendar/{id}
pub async fn delete_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !CalendarEventRepo::delete(&state.db, auth.id(), &event_id).await? {
        return Err(not_found(event_id));
    }

    tracing::info!(%event_id, user_id = %auth.id(), "Calendar event deleted");

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        CalendarEvent::ENTITY
    ))))
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: CalendarEvent::ENTITY,
        id,
    })
}
