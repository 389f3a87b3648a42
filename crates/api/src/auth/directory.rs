//! Account registration and login.
//!
//! Sits between the HTTP handlers and [`UserRepo`]: registration hashes the
//! password before it reaches the store, and login verifies it and stamps
//! `last_login`.

use alarmist_core::error::CoreError;
use alarmist_core::validation::validate_input;
use alarmist_db::error::StoreError;
use alarmist_db::models::user::{CreateUser, User};
use alarmist_db::repositories::UserRepo;
use alarmist_db::Database;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};

/// Message for every failed login, whatever the cause.
const INVALID_LOGIN: &str = "Incorrect username or password";

/// Request body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Create a new account.
///
/// Fails with [`CoreError::Conflict`] if the username (compared
/// case-sensitively) is already registered.
pub async fn register(db: &Database, input: &RegisterRequest) -> AppResult<User> {
    validate_input(input)?;

    let password_hash = hash_password(&input.password)?;
    let create = CreateUser {
        username: input.username.clone(),
        email: input.email.clone(),
        password_hash,
    };

    match UserRepo::create(db, create).await {
        Ok(user) => Ok(user),
        Err(StoreError::Duplicate { .. }) => Err(AppError::Core(CoreError::Conflict(
            "Username already registered".into(),
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Check a username/password pair and record the login.
///
/// An unknown username and a wrong password fail identically with
/// [`CoreError::InvalidCredential`].
pub async fn authenticate(db: &Database, username: &str, password: &str) -> AppResult<User> {
    let Some(user) = UserRepo::find_by_username(db, username).await? else {
        tracing::warn!(username, "Login attempt for unknown user");
        return Err(invalid_login());
    };

    if !verify_password(password, &user.password_hash)? {
        tracing::warn!(username, "Login attempt with wrong password");
        return Err(invalid_login());
    }

    let user = UserRepo::record_successful_login(db, username)
        .await?
        .unwrap_or(user);
    Ok(user)
}

fn invalid_login() -> AppError {
    AppError::Core(CoreError::InvalidCredential(INVALID_LOGIN.into()))
}
