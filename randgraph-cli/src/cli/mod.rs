//! Command-line interface for generating random graphs.
//!
//! The `binomial` command builds a binomial generator from its flags and
//! writes one full pass to the supplied writer as DOT.

mod commands;

pub use commands::{BinomialArgs, Cli, CliError, Command, LabelArgs, run_cli};
