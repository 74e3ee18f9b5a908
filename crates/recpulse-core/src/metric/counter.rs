//! Monotonic counter.
//!
//! Lock-free; safe to update from any task or thread. Concurrent increments
//! are never lost, their relative order is unspecified.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{RecPulseError, Result};
use crate::metric::validate_name;

/// Monotonically increasing 64-bit counter.
pub struct Counter {
    name: String,
    help: String,
    value: AtomicU64,
}

impl Counter {
    /// Create a counter. The name must be a valid Prometheus metric name.
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            help: help.into(),
            value: AtomicU64::new(0),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Increment by 1.
    #[inline]
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment by an arbitrary amount. The amount must be positive;
    /// a zero increment is rejected without touching the value.
    pub fn add(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Err(RecPulseError::InvalidArgument(
                "counter increment must be positive".into(),
            ));
        }
        self.value.fetch_add(amount, Ordering::Relaxed);
        Ok(())
    }

    /// Current total.
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
