//! Fixed-bucket histogram with consistent snapshots.
//!
//! Bucket counts are stored cumulatively: one observation increments every
//! bucket whose upper bound covers the value. Observations above the largest
//! finite bound are reflected only in sum/count; the `+Inf` bucket is derived
//! from the count at exposition time.
//!
//! Mutable state sits behind a per-histogram `RwLock`, so `observe` is atomic
//! with respect to `snapshot`: exposition never sees a sum/count/bucket triple
//! from two different observations.

use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::error::{RecPulseError, Result};
use crate::metric::validate_name;

/// Histogram over a fixed set of ascending bucket bounds.
#[derive(Debug)]
pub struct Histogram {
    name: String,
    help: String,
    bounds: Vec<f64>,
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Cumulative counts, one per bound.
    buckets: Vec<u64>,
    sum: f64,
    count: u64,
}

/// Consistent view of a histogram at a single point in time.
#[derive(Debug, Clone)]
pub struct HistogramSnapshot {
    /// `(upper_bound, cumulative_count)` pairs, ascending by bound.
    pub buckets: Vec<(f64, u64)>,
    pub sum: f64,
    pub count: u64,
}

impl Histogram {
    /// Create a histogram. Bounds must be non-empty, finite, and strictly
    /// ascending; the name must be a valid Prometheus metric name.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        bounds: Vec<f64>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        if bounds.is_empty() {
            return Err(RecPulseError::InvalidArgument(
                "histogram requires at least one bucket bound".into(),
            ));
        }
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(RecPulseError::InvalidArgument(
                "histogram bucket bounds must be finite".into(),
            ));
        }
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(RecPulseError::InvalidArgument(
                "histogram bucket bounds must be strictly ascending".into(),
            ));
        }

        let buckets = vec![0; bounds.len()];
        Ok(Self {
            name,
            help: help.into(),
            bounds,
            inner: RwLock::new(Inner {
                buckets,
                ..Inner::default()
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Record one sample. Non-finite values are rejected without mutating
    /// any state.
    pub fn observe(&self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(RecPulseError::InvalidArgument(
                "histogram observation must be finite".into(),
            ));
        }

        let mut inner = self.inner.write();
        for (i, bound) in self.bounds.iter().enumerate() {
            if value <= *bound {
                inner.buckets[i] += 1;
            }
        }
        inner.sum += value;
        inner.count += 1;
        Ok(())
    }

    /// Record a duration in seconds.
    pub fn observe_duration(&self, duration: Duration) {
        // as_secs_f64 is always finite, so observe cannot fail here.
        let _ = self.observe(duration.as_secs_f64());
    }

    /// Start timing; the returned handle observes the elapsed wall-clock
    /// time when stopped.
    pub fn start_timer(&self) -> Timer<'_> {
        Timer {
            histogram: self,
            start: Instant::now(),
        }
    }

    /// Read a consistent (buckets, sum, count) view.
    pub fn snapshot(&self) -> HistogramSnapshot {
        let inner = self.inner.read();
        HistogramSnapshot {
            buckets: self
                .bounds
                .iter()
                .copied()
                .zip(inner.buckets.iter().copied())
                .collect(),
            sum: inner.sum,
            count: inner.count,
        }
    }
}

/// Running timer handle returned by [`Histogram::start_timer`].
pub struct Timer<'a> {
    histogram: &'a Histogram,
    start: Instant,
}

impl Timer<'_> {
    /// Observe the elapsed wall-clock time and return it.
    pub fn stop(self) -> Duration {
        let elapsed = self.start.elapsed();
        self.histogram.observe_duration(elapsed);
        elapsed
    }
}
