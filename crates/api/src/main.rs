use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use alarmist_api::config::ServerConfig;
use alarmist_api::router::build_app_router;
use alarmist_api::state::AppState;
use alarmist_db::Database;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        origins = config.cors_origins.len(),
        token_ttl_mins = config.jwt.access_token_expiry_mins,
        "Loaded server configuration",
    );

    // Accounts and records live only as long as this process.
    let state = AppState {
        db: Database::in_memory(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let host: IpAddr = config
        .host
        .parse()
        .unwrap_or_else(|e| panic!("HOST '{}' is not an IP address: {e}", config.host));
    let addr = SocketAddr::new(host, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, "Alarm API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped; in-memory state discarded");
}

/// Install the global subscriber.
///
/// `RUST_LOG` picks the filter; `LOG_FORMAT=json` switches to one JSON object
/// per line for log shippers.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "alarmist_api=debug,alarmist_db=info,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::warn!(error = %e, "Ctrl-C handler failed");
            }
            tracing::info!("Received Ctrl-C, shutting down");
        }
        () = sigterm => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
