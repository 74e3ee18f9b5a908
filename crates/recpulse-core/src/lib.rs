//! recPulse core: metric primitives, registry, and exposition encoding.
//!
//! This crate defines the instrumentation surface shared by the gateway and
//! by tests: atomic counters, fixed-bucket histograms, an insertion-ordered
//! registry, and the Prometheus text encoder. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RecPulseError`/`Result` so that
//! registration or observation mistakes are reported instead of crashing
//! the serving process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod encode;
pub mod error;
pub mod metric;
pub mod registry;

/// Shared result type.
pub use error::{RecPulseError, Result};

pub use metric::{Counter, Histogram, HistogramSnapshot, Timer};
pub use registry::{Metric, Registry};
