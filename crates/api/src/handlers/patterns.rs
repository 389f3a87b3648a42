//! Handlers for the `/patterns` resource.

use alarmist_core::error::CoreError;
use alarmist_core::validation::validate_input;
use alarmist_db::models::pattern::{Pattern, PatternInput};
use alarmist_db::repositories::PatternRepo;
use alarmist_db::store::OwnedRecord;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// `{ "patterns": [...] }` body returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct PatternListResponse {
    pub patterns: Vec<Pattern>,
}

/// GET /api/patterns
pub async fn list_patterns(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<PatternListResponse>> {
    let patterns = PatternRepo::list(&state.db, auth.id()).await?;
    Ok(Json(PatternListResponse { patterns }))
}

/// POST /api/patterns
///
/// Omitted per-time settings are filled with defaults.
pub async fn create_pattern(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PatternInput>,
) -> AppResult<Json<Pattern>> {
    validate_input(&input)?;

    let pattern = PatternRepo::create(&state.db, auth.id(), &input).await?;

    tracing::info!(
        pattern_id = %pattern.id,
        user_id = %auth.id(),
        times = pattern.times.len(),
        "Pattern created",
    );

    Ok(Json(pattern))
}

/// GET /api/patterns/{id}
pub async fn get_pattern(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(pattern_id): Path<String>,
) -> AppResult<Json<Pattern>> {
    PatternRepo::find_by_id(&state.db, auth.id(), &pattern_id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(pattern_id))
}

/// PUT /api/patterns/{id}
///
/// Full replacement; id, owner and creation time are kept.
pub async fn update_pattern(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(pattern_id): Path<String>,
    Json(input): Json<PatternInput>,
) -> AppResult<Json<Pattern>> {
    validate_input(&input)?;

    let pattern = PatternRepo::update(&state.db, auth.id(), &pattern_id, &input)
        .await?
        .ok_or_else(|| not_found(pattern_id))?;

    tracing::info!(pattern_id = %pattern.id, user_id = %auth.id(), "Pattern updated");

    Ok(Json(pattern))
}

/// DELETE /api/patterns/{id}
pub async fn delete_pattern(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(pattern_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !PatternRepo::delete(&state.db, auth.id(), &pattern_id).await? {
        return Err(not_found(pattern_id));
    }

    tracing::info!(%pattern_id, user_id = %auth.id(), "Pattern deleted");

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        Pattern::ENTITY
    ))))
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: Pattern::ENTITY,
        id,
    })
}
