//! vitals collector binary.
//!
//! Receives counter/gauge updates over HTTP and aggregates them in memory.
//! Config comes from a YAML file (first CLI argument, default
//! `vitals-collector.yaml`); a missing file falls back to defaults.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use vitals_collector::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "vitals-collector.yaml".to_string());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::info!(%path, %err, "config not loaded, using defaults");
            config::CollectorConfig::default()
        }
    };

    let listen: SocketAddr = cfg
        .collector
        .listen
        .parse()
        .expect("collector.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "vitals-collector starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
