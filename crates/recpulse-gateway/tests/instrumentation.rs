//! Handler shim instrumentation tests.
//!
//! Stub recommenders drive the handler directly: every request must count
//! once, time once, and count an error exactly when the recommender fails.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;

use recpulse_gateway::app_state::AppState;
use recpulse_gateway::config::GatewayConfig;
use recpulse_gateway::ops;
use recpulse_gateway::recommend::{self, ModelFailure, Recommender};

struct FixedRecommender {
    posts: Vec<String>,
}

#[async_trait]
impl Recommender for FixedRecommender {
    async fn recommend(&self) -> Result<Vec<String>, ModelFailure> {
        Ok(self.posts.clone())
    }
}

struct FailingRecommender;

#[async_trait]
impl Recommender for FailingRecommender {
    async fn recommend(&self) -> Result<Vec<String>, ModelFailure> {
        Err(ModelFailure)
    }
}

fn state_with(recommender: Arc<dyn Recommender>) -> AppState {
    AppState::with_recommender(GatewayConfig::default(), recommender).expect("state build")
}

#[tokio::test]
async fn success_counts_request_and_latency_only() {
    let state = state_with(Arc::new(FixedRecommender {
        posts: vec!["post1".into(), "post2".into()],
    }));

    let body = recommend::recommend(State(state.clone())).await;

    let metrics = state.metrics();
    assert_eq!(metrics.requests.value(), 1);
    assert_eq!(metrics.errors.value(), 0);
    assert_eq!(metrics.latency.snapshot().count, 1);
    assert_eq!(body.0["posts"][0], "post1");
    assert_eq!(body.0["posts"][1], "post2");
}

#[tokio::test]
async fn failure_counts_error_and_still_answers_with_payload() {
    let state = state_with(Arc::new(FailingRecommender));

    let body = recommend::recommend(State(state.clone())).await;

    let metrics = state.metrics();
    assert_eq!(metrics.requests.value(), 1);
    assert_eq!(metrics.errors.value(), 1);
    assert_eq!(metrics.latency.snapshot().count, 1);
    assert_eq!(body.0["error"], "model failure");
}

#[tokio::test]
async fn every_request_observes_latency_once() {
    let state = state_with(Arc::new(FailingRecommender));

    for _ in 0..3 {
        let _ = recommend::recommend(State(state.clone())).await;
    }

    let metrics = state.metrics();
    assert_eq!(metrics.requests.value(), 3);
    assert_eq!(metrics.errors.value(), 3);
    assert_eq!(metrics.latency.snapshot().count, 3);
}

#[tokio::test]
async fn metrics_endpoint_exposes_registry() {
    let state = state_with(Arc::new(FailingRecommender));
    let _ = recommend::recommend(State(state.clone())).await;

    let resp = ops::metrics(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains("# TYPE recommendation_requests_total counter"));
    assert!(text.contains("recommendation_requests_total 1"));
    assert!(text.contains("# TYPE recommendation_latency_seconds histogram"));
    assert!(text.contains("recommendation_latency_seconds_bucket{le=\"+Inf\"} 1"));
    assert!(text.contains("recommendation_errors_total 1"));
}
