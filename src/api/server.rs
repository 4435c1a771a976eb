use std::net::SocketAddr;

use axum::{Router, routing::get, routing::post};
use tokio::net::TcpListener;
use tracing::info;

use super::{
    services::{compute_factorial, compute_fibonacci, compute_power, health, root},
    state::AppState,
};
use crate::config::Config;
use crate::ledger::OpLogStore;
use crate::service::MathService;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the application router over a fully constructed state.
///
/// Split out from [`run`] so tests can drive the router directly with
/// `tower::ServiceExt::oneshot` against an isolated store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/power", post(compute_power))
        .route("/fibonacci", post(compute_fibonacci))
        .route("/factorial", post(compute_factorial))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run(address: Option<SocketAddr>) -> Result<(), AnyError> {
    info!("Loading configuration");
    let config = Config::load().map_err(|e| format!("Failed to load config: {}", e))?;

    info!(path = %config.server.ledger_path.display(), "Opening operation log");
    let store = OpLogStore::open(&config.server.ledger_path)
        .map_err(|e| format!("Failed to open operation log: {}", e))?;
    store
        .initialize()
        .map_err(|e| format!("Failed to initialize operation log: {}", e))?;

    let service = MathService::new(store.clone());

    let address = address.unwrap_or(config.server.bind_addr);
    let state = AppState::new(config, service, store);
    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "mathbox API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
