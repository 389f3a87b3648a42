//! Bearer-token authentication extractor for Axum handlers.

use alarmist_core::error::CoreError;
use alarmist_db::models::user::User;
use alarmist_db::repositories::UserRepo;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::jwt::parse_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account resolved from the `Authorization: Bearer <token>`
/// header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Extraction fails with 401 before the handler runs if the
/// header is missing, the token does not parse, or its subject no longer
/// exists:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// The acting account's id, used as the owner of every record it touches.
    pub fn id(&self) -> &str {
        &self.user.id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Not authenticated"))?;

        let token = bearer_token(header).ok_or_else(|| unauthorized("Not authenticated"))?;

        let claims = parse_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Could not validate credentials"))?;

        let user = UserRepo::find_by_username(&state.db, &claims.sub)
            .await?
            .ok_or_else(|| unauthorized("Could not validate credentials"))?;

        Ok(AuthUser { user })
    }
}

/// Extract the credentials from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}
