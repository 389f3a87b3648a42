//! Handlers for registration, login, and token validation.

use alarmist_db::models::user::UserResponse;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::auth::directory::{self, RegisterRequest};
use crate::auth::jwt::{generate_access_token, TOKEN_TYPE};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token` (OAuth2 password-flow field names).
///
/// Accepted as `application/x-www-form-urlencoded` or as
/// `multipart/form-data`, which is what browser `FormData` posts. Any other
/// body, or a missing field, is a 400.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl<S: Send + Sync> FromRequest<S> for LoginForm {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| {
                ct.trim_start()
                    .to_ascii_lowercase()
                    .starts_with("multipart/form-data")
            });

        if multipart {
            let body = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Self::from_multipart(body).await
        } else {
            let Form(form) = Form::<LoginForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(form)
        }
    }
}

impl LoginForm {
    async fn from_multipart(mut body: Multipart) -> AppResult<Self> {
        let mut username = None;
        let mut password = None;

        while let Some(field) = body
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            let slot = match field.name() {
                Some("username") => &mut username,
                Some("password") => &mut password,
                _ => continue,
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            *slot = Some(value);
        }

        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(AppError::BadRequest(
                "Form fields username and password are required".into(),
            )),
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Response for `GET /validate-token`.
#[derive(Debug, Serialize)]
pub struct ValidateTokenResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create an account. Returns the public account view.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = directory::register(&state.db, &input).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(Json(user.into()))
}

/// POST /token
///
/// Exchange a username + password form for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    form: LoginForm,
) -> AppResult<Json<TokenResponse>> {
    let user = directory::authenticate(&state.db, &form.username, &form.password).await?;

    let access_token = generate_access_token(&user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: TOKEN_TYPE,
    }))
}

/// GET /validate-token
///
/// Succeeds only with a valid bearer token; echoes the resolved account.
pub async fn validate_token(auth: AuthUser) -> Json<ValidateTokenResponse> {
    Json(ValidateTokenResponse {
        message: "Token is valid",
        user: auth.user.into(),
    })
}
