//! Shared test utilities used across randgraph crates.

pub mod ci;
pub mod tracing;
