//! Request extractors that gate handlers.
//!
//! - [`auth::AuthUser`] -- resolves the account behind a Bearer token.

pub mod auth;
