//! Axum router wiring.
//!
//! Exposes the instrumented `/recommend` route plus the operational
//! endpoints (`/healthz`, `/metrics`).

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, recommend};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", get(recommend::recommend))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
