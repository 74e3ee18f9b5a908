//! recPulse gateway binary.
//!
//! - `/recommend` : instrumented placeholder recommendation endpoint
//! - `/metrics`   : Prometheus text exposition over the full registry
//! - `/healthz`   : liveness

use std::net::SocketAddr;
use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use recpulse_gateway::{app_state, config, router};

const CONFIG_PATH: &str = "recpulse.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = if Path::new(CONFIG_PATH).exists() {
        config::load_from_file(CONFIG_PATH).expect("config load failed")
    } else {
        tracing::info!(path = CONFIG_PATH, "config file not found, using defaults");
        config::GatewayConfig::default()
    };

    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    // A duplicate metric name is a wiring bug: abort at startup instead of
    // serving an inconsistent registry.
    let state = app_state::AppState::new(cfg).expect("app state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "recpulse-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
