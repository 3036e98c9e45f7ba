//! Benchmark support crate for randgraph.
//!
//! Provides parameter types and seeded generator construction shared by the
//! Criterion benchmarks for edge generation and DOT rendering.

pub mod error;
pub mod params;
