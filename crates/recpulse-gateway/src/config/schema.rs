use serde::Deserialize;

use recpulse_core::error::{RecPulseError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub recommend: RecommendSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RecPulseError::Config("version must be 1".into()));
        }

        self.gateway.validate()?;
        self.recommend.validate()?;

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            recommend: RecommendSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<std::net::SocketAddr>().map_err(|_| {
            RecPulseError::Config("gateway.listen must be a valid socket address".into())
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Simulated recommender tuning. Defaults mirror the classic demo: a
/// uniform 100..=1000 ms delay and a 20% failure rate.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendSection {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    #[serde(default = "default_posts")]
    pub posts: Vec<String>,
}

impl Default for RecommendSection {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            failure_rate: default_failure_rate(),
            posts: default_posts(),
        }
    }
}

impl RecommendSection {
    pub fn validate(&self) -> Result<()> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(RecPulseError::Config(
                "recommend.min_delay_ms must not exceed max_delay_ms".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(RecPulseError::Config(
                "recommend.failure_rate must be between 0.0 and 1.0".into(),
            ));
        }
        if self.posts.is_empty() {
            return Err(RecPulseError::Config(
                "recommend.posts must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_min_delay_ms() -> u64 {
    100
}
fn default_max_delay_ms() -> u64 {
    1000
}
fn default_failure_rate() -> f64 {
    0.2
}
fn default_posts() -> Vec<String> {
    vec!["post1".into(), "post2".into()]
}
