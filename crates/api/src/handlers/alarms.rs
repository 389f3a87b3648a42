//! Handlers for the `/alarms` resource.

use alarmist_core::error::CoreError;
use alarmist_core::validation::validate_input;
use alarmist_db::models::alarm::{Alarm, AlarmInput};
use alarmist_db::repositories::AlarmRepo;
use alarmist_db::store::OwnedRecord;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/alarms
pub async fn list_alarms(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Alarm>>> {
    let alarms = AlarmRepo::list(&state.db, auth.id()).await?;
    Ok(Json(alarms))
}

/// POST /api/alarms
///
/// Owner, id, and timestamps are assigned by the server.
pub async fn create_alarm(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AlarmInput>,
) -> AppResult<Json<Alarm>> {
    validate_input(&input)?;

    let alarm = AlarmRepo::create(&state.db, auth.id(), &input).await?;

    tracing::info!(
        alarm_id = %alarm.id,
        date = %alarm.date,
        time = %alarm.time,
        user_id = %auth.id(),
        "Alarm created",
    );

    Ok(Json(alarm))
}

/// GET /api/alarms/{id}
pub async fn get_alarm(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(alarm_id): Path<String>,
) -> AppResult<Json<Alarm>> {
    AlarmRepo::find_by_id(&state.db, auth.id(), &alarm_id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(alarm_id))
}

/// PUT /api/alarms/{id}
pub async fn update_alarm(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(alarm_id): Path<String>,
    Json(input): Json<AlarmInput>,
) -> AppResult<Json<Alarm>> {
    validate_input(&input)?;

    let alarm = AlarmRepo::update(&state.db, auth.id(), &alarm_id, &input)
        .await?
        .ok_or_else(|| not_found(alarm_id))?;

    tracing::info!(alarm_id = %alarm.id, user_id = %auth.id(), "Alarm updated");

    Ok(Json(alarm))
}

/// DELETE /api/alarms/{id}
pub async fn delete_alarm(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(alarm_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !AlarmRepo::delete(&state.db, auth.id(), &alarm_id).await? {
        return Err(not_found(alarm_id));
    }

    tracing::info!(%alarm_id, user_id = %auth.id(), "Alarm deleted");

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        Alarm::ENTITY
    ))))
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Alarm::ENTITY,
        id,
    })
}
