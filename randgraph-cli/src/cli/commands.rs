//! Command implementations and argument parsing for the randgraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use randgraph_core::{BinomialBuilder, InvalidParameter, RandGraph, labels};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "randgraph", about = "Stream random graphs as Graphviz DOT.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a binomial random graph.
    Binomial(BinomialArgs),
}

/// Options accepted by the `binomial` command.
///
/// Counts are parsed as signed integers so that out-of-range values reach
/// the generator and are reported with their stable error code.
#[derive(Debug, Args, Clone)]
pub struct BinomialArgs {
    /// Number of vertices.
    #[arg(long, allow_hyphen_values = true)]
    pub vertices: i64,

    /// Number of trials per tail vertex.
    #[arg(long, allow_hyphen_values = true)]
    pub trials: i64,

    /// Success probability of each trial.
    #[arg(long, allow_hyphen_values = true)]
    pub probability: f64,

    /// Allow edges from a vertex to itself.
    #[arg(long)]
    pub loops: bool,

    /// Allow repeated edges between the same pair of vertices.
    #[arg(long)]
    pub multiedges: bool,

    /// Draw edges as directed.
    #[arg(long)]
    pub directed: bool,

    /// Seed for a reproducible graph.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Vertex and edge labelling.
    #[command(flatten)]
    pub labels: LabelArgs,
}

/// Labelling options shared by generator commands.
#[derive(Debug, Args, Clone, Default)]
pub struct LabelArgs {
    /// Comma-separated vertex names, cycled with an id suffix once exhausted.
    #[arg(long, value_delimiter = ',', conflicts_with = "id_labels")]
    pub labels: Option<Vec<String>>,

    /// Label vertices with their identifiers.
    #[arg(long)]
    pub id_labels: bool,

    /// Label edges `e<id>`.
    #[arg(long)]
    pub edge_id_labels: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The generator rejected a parameter.
    #[error(transparent)]
    Generator(#[from] InvalidParameter),
    /// Writing the graph failed.
    #[error("failed to write graph: {source}")]
    Io {
        /// Underlying writer error.
        #[source]
        source: io::Error,
    },
}

/// Executes the CLI command represented by `cli`, writing the graph to
/// `writer` as DOT.
///
/// # Errors
/// Returns [`CliError`] when the generator parameters are invalid or the
/// writer fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use randgraph_cli::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from([
///     "randgraph", "binomial", "--vertices", "2", "--trials", "1",
///     "--probability", "1", "--directed", "--seed", "3",
/// ]);
/// let mut out = Vec::new();
/// run_cli(cli, &mut out)?;
/// assert!(String::from_utf8_lossy(&out).contains("0 -> 1 [dir=\"forward\"]"));
/// # Ok::<(), randgraph_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, writer),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli, writer: impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Binomial(args) => {
            Span::current().record("command", field::display("binomial"));
            run_binomial(args, writer)
        }
    }
}

#[instrument(
    name = "cli.binomial",
    err,
    skip(args, writer),
    fields(seeded = args.seed.is_some(), vertex_labels = field::Empty),
)]
pub(super) fn run_binomial(args: BinomialArgs, writer: impl Write) -> Result<(), CliError> {
    let builder = binomial_builder(&args);
    let generator = builder.build()?;
    let vertices = generator.vertex_count();
    let directed = generator.directed();

    let mut graph = RandGraph::new(generator);
    graph
        .write_dot(writer)
        .map_err(|source| CliError::Io { source })?;
    info!(vertices, directed, "graph written");
    Ok(())
}

pub(super) fn binomial_builder(args: &BinomialArgs) -> BinomialBuilder {
    let mut builder = BinomialBuilder::new(args.vertices, args.trials, args.probability)
        .with_loops(args.loops)
        .with_multiedges(args.multiedges)
        .with_directed(args.directed);
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }

    let span = Span::current();
    let LabelArgs {
        labels: names,
        id_labels,
        edge_id_labels,
    } = &args.labels;
    if let Some(names) = names {
        span.record("vertex_labels", field::display("cycled"));
        builder = builder.with_vertex_labeler(labels::cycled(names.iter().map(String::as_str)));
    } else if *id_labels {
        span.record("vertex_labels", field::display("ids"));
        builder = builder.with_vertex_labeler(labels::vertex_ids());
    }
    if *edge_id_labels {
        builder = builder.with_edge_labeler(labels::edge_ids());
    }
    builder
}
