//! vitals agent binary.
//!
//! Samples host indicators and reports them to the collector until stopped
//! or until the report failure budget is exhausted.

use tracing_subscriber::{fmt, EnvFilter};

use vitals_agent::{config, Agent};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "vitals-agent.yaml".to_string());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::info!(%path, %err, "config not loaded, using defaults");
            config::AgentConfig::default()
        }
    };

    if let Err(err) = Agent::new(cfg).run().await {
        tracing::error!(%err, "reporting loop terminated");
        std::process::exit(1);
    }
}
