//! Shared application state for the recPulse gateway.
//!
//! Built once at startup: constructs the metric registry, registers the
//! service metrics, and wires the recommender. Startup errors are explicit
//! (Result instead of panic) so main can decide how to abort.

use std::sync::Arc;

use recpulse_core::error::Result;
use recpulse_core::metric::{Counter, Histogram};
use recpulse_core::registry::Registry;

use crate::config::GatewayConfig;
use crate::recommend::{Recommender, SimulatedRecommender};

/// Latency bucket upper bounds, in seconds.
const LATENCY_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Update handles for the service metrics.
pub struct AppMetrics {
    pub requests: Arc<Counter>,
    pub errors: Arc<Counter>,
    pub latency: Arc<Histogram>,
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Registry,
    metrics: AppMetrics,
    recommender: Arc<dyn Recommender>,
}

impl AppState {
    /// Build application state with the simulated recommender.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let recommender = Arc::new(SimulatedRecommender::new(&cfg.recommend));
        Self::with_recommender(cfg, recommender)
    }

    /// Build application state around an arbitrary recommender.
    pub fn with_recommender(
        cfg: GatewayConfig,
        recommender: Arc<dyn Recommender>,
    ) -> Result<Self> {
        let mut registry = Registry::new();

        let requests = registry.counter(
            "recommendation_requests_total",
            "Total recommendation requests",
        )?;
        let latency = registry.histogram(
            "recommendation_latency_seconds",
            "Recommendation latency",
            LATENCY_BUCKETS.to_vec(),
        )?;
        let errors = registry.counter(
            "recommendation_errors_total",
            "Recommendation errors",
        )?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                metrics: AppMetrics {
                    requests,
                    errors,
                    latency,
                },
                recommender,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> &AppMetrics {
        &self.inner.metrics
    }

    pub fn recommender(&self) -> Arc<dyn Recommender> {
        Arc::clone(&self.inner.recommender)
    }
}
