use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Server configuration, read once at startup.
///
/// | Env Var                | Default                 |
/// |------------------------|-------------------------|
/// | `HOST`                 | `0.0.0.0`               |
/// | `PORT`                 | `8000`                  |
/// | `CORS_ORIGINS`         | `http://localhost:3000` |
/// | `REQUEST_TIMEOUT_SECS` | `30`                    |
///
/// Token settings come from [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to call the API with credentials.
    pub cors_origins: Vec<HeaderValue>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics on any unparsable value, an invalid CORS origin, or a missing
    /// `JWT_SECRET`. The server should not start half-configured.
    pub fn from_env() -> Self {
        let origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into());

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_or("PORT", 8000),
            cors_origins: parse_origins(&origins)
                .unwrap_or_else(|bad| panic!("Invalid CORS origin '{bad}'")),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list into header values, dropping blanks.
///
/// Returns the first entry that is not a valid header value.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| HeaderValue::from_str(s).map_err(|_| s.to_string()))
        .collect()
}
