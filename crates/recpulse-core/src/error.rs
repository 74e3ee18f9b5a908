//! Shared error type across recPulse crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RecPulseError>;

/// Unified error type used by core and gateway.
///
/// All variants are startup or programming errors: they surface when the
/// process is wired together (bad metric name, duplicate registration,
/// invalid config) or when instrumentation is misused (zero increment,
/// non-finite observation). None of them are returned to HTTP clients.
#[derive(Debug, Error)]
pub enum RecPulseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("duplicate metric name: {0}")]
    DuplicateName(String),
    #[error("config error: {0}")]
    Config(String),
}
