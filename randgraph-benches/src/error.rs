//! Benchmark setup error type.

use std::io;

use randgraph_core::InvalidParameter;

/// Errors that may occur while preparing a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generator rejected the benchmark parameters.
    #[error("generator construction failed: {0}")]
    Generator(#[from] InvalidParameter),
    /// A handoff worker thread could not be started.
    #[error("handoff worker failed to start: {0}")]
    Handoff(#[from] io::Error),
}
