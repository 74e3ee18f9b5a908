//! Top-level facade crate for recPulse.
//!
//! Re-exports the instrumentation core and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use recpulse_core::*;
}

pub mod gateway {
    pub use recpulse_gateway::*;
}
