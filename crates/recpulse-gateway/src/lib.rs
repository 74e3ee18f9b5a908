//! recPulse gateway library entry.
//!
//! This crate wires config, shared state, the instrumented recommendation
//! handler, and the operational endpoints into an axum service. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod recommend;
pub mod router;
