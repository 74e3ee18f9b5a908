//! Simulated recommender: random delay plus random failure.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::time::sleep;

use super::{ModelFailure, Recommender};
use crate::config::RecommendSection;

/// Placeholder model: sleeps for a uniform random delay, then fails with a
/// configured probability.
pub struct SimulatedRecommender {
    min_delay_ms: u64,
    max_delay_ms: u64,
    failure_rate: f64,
    posts: Vec<String>,
}

impl SimulatedRecommender {
    pub fn new(cfg: &RecommendSection) -> Self {
        Self {
            min_delay_ms: cfg.min_delay_ms,
            max_delay_ms: cfg.max_delay_ms,
            failure_rate: cfg.failure_rate,
            posts: cfg.posts.clone(),
        }
    }
}

#[async_trait]
impl Recommender for SimulatedRecommender {
    async fn recommend(&self) -> Result<Vec<String>, ModelFailure> {
        // ThreadRng is not Send, so draw everything before the await.
        let (delay_ms, failed) = {
            let mut rng = rand::rng();
            (
                rng.random_range(self.min_delay_ms..=self.max_delay_ms),
                rng.random_bool(self.failure_rate),
            )
        };

        sleep(Duration::from_millis(delay_ms)).await;

        if failed {
            return Err(ModelFailure);
        }
        Ok(self.posts.clone())
    }
}
