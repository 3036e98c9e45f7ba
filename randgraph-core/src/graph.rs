//! Facade pairing a [`Source`] with DOT serialization.

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::{dot::DotWriter, source::Source};

/// Wraps a [`Source`] to provide higher-level functionality.
///
/// `RandGraph` adds no state of its own and performs no validation; element
/// passes are forwarded to the source untouched.
///
/// # Examples
/// ```
/// use randgraph_core::{BinomialBuilder, RandGraph};
///
/// let generator = BinomialBuilder::new(2, 1, 1.0)
///     .with_directed(true)
///     .with_seed(3)
///     .build()
///     .expect("parameters are valid");
/// let mut graph = RandGraph::new(generator);
/// let mut out = Vec::new();
/// graph.write_dot(&mut out)?;
/// assert_eq!(
///     String::from_utf8(out).expect("dot output is utf-8"),
///     "digraph {\n  0 [label=\"\"]\n  1 [label=\"\"]\n  0 -> 1 [dir=\"forward\"] [label=\"\"]\n}\n",
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RandGraph<S> {
    source: S,
}

impl<S: Source> RandGraph<S> {
    /// Creates a facade over `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &S { &self.source }

    /// Returns the wrapped source mutably, e.g. to change generator flags.
    #[rustfmt::skip]
    pub fn source_mut(&mut self) -> &mut S { &mut self.source }

    /// Unwraps the facade.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Starts a vertex pass on the wrapped source.
    pub fn vertices(&self) -> S::Vertices {
        self.source.vertices()
    }

    /// Starts an edge pass on the wrapped source.
    pub fn edges(&mut self) -> S::Edges<'_> {
        self.source.edges()
    }

    /// Writes one full pass to `writer` as DOT, draining vertices and then
    /// edges exactly once each.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`. A failed write stops
    /// both passes; the source remains usable.
    #[instrument(name = "core.write_dot", err, skip_all)]
    pub fn write_dot<W: Write>(&mut self, writer: W) -> io::Result<()> {
        let mut dot = DotWriter::begin(writer)?;
        let mut vertices = 0_usize;
        for vertex in self.source.vertices() {
            dot.vertex(&vertex)?;
            vertices += 1;
        }
        let mut edges = 0_usize;
        for edge in self.source.edges() {
            dot.edge(&edge)?;
            edges += 1;
        }
        dot.finish()?;
        debug!(vertices, edges, "graph written as dot");
        Ok(())
    }
}
