//! Graph source abstractions.

use crate::element::{Edge, Vertex};

/// Producer of a graph as two lazy element streams.
///
/// The streams are independent: a caller may drain vertices before edges,
/// interleave them, or read only one. Each call starts a fresh pass and
/// sources backed by randomness are free to yield a different graph every
/// time. Dropping a stream part-way is always safe and leaves the source
/// usable.
///
/// `edges` takes `&mut self` because generators advance private state (their
/// random source) while producing edges; the borrow keeps one edge pass
/// running per source at a time. `vertices` returns an owned iterator so it
/// can be held across an edge pass.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, Source, Vertex};
///
/// struct Path(usize);
///
/// impl Source for Path {
///     type Vertices = std::iter::Map<std::ops::Range<usize>, fn(usize) -> Vertex>;
///     type Edges<'a> = std::iter::Map<std::ops::Range<usize>, fn(usize) -> Edge>;
///
///     fn vertices(&self) -> Self::Vertices {
///         (0..self.0).map(Vertex::new as fn(usize) -> Vertex)
///     }
///
///     fn edges(&mut self) -> Self::Edges<'_> {
///         fn link(id: usize) -> Edge { Edge::new(id, id, id + 1, false) }
///         (0..self.0.saturating_sub(1)).map(link as fn(usize) -> Edge)
///     }
/// }
///
/// let mut path = Path(3);
/// assert_eq!(path.vertices().count(), 3);
/// assert_eq!(path.edges().map(|e| (e.v0(), e.v1())).collect::<Vec<_>>(), [(0, 1), (1, 2)]);
/// ```
pub trait Source {
    /// Iterator over the vertices of one pass.
    type Vertices: Iterator<Item = Vertex>;

    /// Iterator over the edges of one pass.
    type Edges<'a>: Iterator<Item = Edge>
    where
        Self: 'a;

    /// Starts a vertex pass.
    fn vertices(&self) -> Self::Vertices;

    /// Starts an edge pass.
    fn edges(&mut self) -> Self::Edges<'_>;
}

/// [`Source`] that replays fixed vertex and edge lists on every pass.
///
/// Useful for serializing a previously captured graph and as a test double.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, FixedSource, Source, Vertex};
///
/// let mut source = FixedSource::new(
///     vec![Vertex::new(0), Vertex::new(1)],
///     vec![Edge::new(0, 0, 1, true)],
/// );
/// assert_eq!(source.vertices().len(), 2);
/// assert_eq!(source.edges().count(), 1);
/// // Replays are identical.
/// assert_eq!(source.edges().count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedSource {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl FixedSource {
    /// Creates a source replaying `vertices` and `edges` in order.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Captures one full pass of `source`, vertices first.
    #[must_use]
    pub fn capture<S: Source>(source: &mut S) -> Self {
        let vertices = source.vertices().collect();
        let edges = source.edges().collect();
        Self { vertices, edges }
    }

    /// Returns the replayed vertices.
    #[must_use]
    pub fn vertex_list(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the replayed edges.
    #[must_use]
    pub fn edge_list(&self) -> &[Edge] {
        &self.edges
    }
}

impl Source for FixedSource {
    type Vertices = std::vec::IntoIter<Vertex>;
    type Edges<'a> = std::iter::Cloned<std::slice::Iter<'a, Edge>>;

    fn vertices(&self) -> Self::Vertices {
        self.vertices.clone().into_iter()
    }

    fn edges(&mut self) -> Self::Edges<'_> {
        self.edges.iter().cloned()
    }
}
