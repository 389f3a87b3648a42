use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the stores and config are behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Account directory and per-user record stores.
    pub db: alarmist_db::Database,
    /// Server configuration (token settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
