//! Support library for the randgraph CLI binary.
//!
//! Exposes argument parsing and command execution so tests can drive the
//! CLI without spawning a subprocess.

pub mod cli;
pub mod logging;
