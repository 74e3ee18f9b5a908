//! Recommendation endpoint: handler shim plus the pluggable recommender.
//!
//! The handler owns the instrumentation contract: one request-count
//! increment per call, one latency observation covering the recommender
//! call, and one error-count increment whenever the recommender reports
//! failure, regardless of how that failure is rendered to the client.

pub mod simulated;

use async_trait::async_trait;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::app_state::AppState;

pub use simulated::SimulatedRecommender;

/// Business-logic failure reported by a recommender. Deliberately opaque:
/// the instrumentation counts it and the handler renders it.
#[derive(Debug, Error)]
#[error("model failure")]
pub struct ModelFailure;

/// Pluggable recommendation source wrapped by the instrumented handler.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self) -> std::result::Result<Vec<String>, ModelFailure>;
}

/// `GET /recommend`
pub async fn recommend(State(state): State<AppState>) -> Json<Value> {
    let metrics = state.metrics();
    metrics.requests.inc();

    let timer = metrics.latency.start_timer();
    let result = state.recommender().recommend().await;
    timer.stop();

    match result {
        Ok(posts) => Json(json!({ "posts": posts })),
        Err(err) => {
            metrics.errors.inc();
            // Failures still answer 200; the error payload is the contract.
            Json(json!({ "error": err.to_string() }))
        }
    }
}
