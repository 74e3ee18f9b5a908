//! Insertion-ordered metric registry.

use std::sync::Arc;

use crate::error::{RecPulseError, Result};
use crate::metric::{Counter, Histogram};

/// A registered metric handle.
#[derive(Clone)]
pub enum Metric {
    Counter(Arc<Counter>),
    Histogram(Arc<Histogram>),
}

impl Metric {
    pub fn name(&self) -> &str {
        match self {
            Metric::Counter(c) => c.name(),
            Metric::Histogram(h) => h.name(),
        }
    }
}

/// Process-wide collection of named metrics.
///
/// Populated once at startup and then shared read-only; registration order
/// is preserved so exposition output is deterministic. There is no
/// unregister: metrics live for the process lifetime.
#[derive(Default)]
pub struct Registry {
    metrics: Vec<Metric>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a metric handle. Fails with `DuplicateName` when the name is
    /// already taken; the existing registration is left untouched.
    pub fn register(&mut self, metric: Metric) -> Result<()> {
        if self.metrics.iter().any(|m| m.name() == metric.name()) {
            return Err(RecPulseError::DuplicateName(metric.name().to_string()));
        }
        tracing::debug!(name = metric.name(), "metric registered");
        self.metrics.push(metric);
        Ok(())
    }

    /// Create and register a counter, returning the update handle.
    pub fn counter(&mut self, name: &str, help: &str) -> Result<Arc<Counter>> {
        let counter = Arc::new(Counter::new(name, help)?);
        self.register(Metric::Counter(Arc::clone(&counter)))?;
        Ok(counter)
    }

    /// Create and register a histogram, returning the update handle.
    pub fn histogram(
        &mut self,
        name: &str,
        help: &str,
        bounds: Vec<f64>,
    ) -> Result<Arc<Histogram>> {
        let histogram = Arc::new(Histogram::new(name, help, bounds)?);
        self.register(Metric::Histogram(Arc::clone(&histogram)))?;
        Ok(histogram)
    }

    /// Iterate metrics in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Metric> + '_ {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
