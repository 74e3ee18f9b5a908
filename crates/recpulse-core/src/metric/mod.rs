//! Metric primitives: counter and histogram.

pub mod counter;
pub mod histogram;

pub use counter::Counter;
pub use histogram::{Histogram, HistogramSnapshot, Timer};

use crate::error::{RecPulseError, Result};

/// Validate a metric name against the Prometheus data model:
/// `[a-zA-Z_:][a-zA-Z0-9_:]*`.
///
/// Invalid names are rejected at construction so a bad name fails the
/// process at startup instead of producing an unscrapable exposition.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) => {
            (c.is_ascii_alphabetic() || c == '_' || c == ':')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(RecPulseError::InvalidArgument(format!(
            "invalid metric name: {name:?}"
        )))
    }
}
