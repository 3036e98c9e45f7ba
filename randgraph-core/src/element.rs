//! Vertex and edge value types emitted by graph sources.
//!
//! Elements are plain values: once a source hands one out nothing else keeps
//! a reference to it, so the stream is the only place an element lives.

use std::{fmt, sync::Arc};

/// Pre-rendered label attached to a [`Vertex`] or [`Edge`].
///
/// Labels are produced by labeling strategies as text and rendered verbatim
/// (after escaping) by the DOT writer. An absent label is modelled as
/// `Option::None` on the element rather than as an empty `Label`.
///
/// # Examples
/// ```
/// use randgraph_core::Label;
///
/// let label = Label::from("alpha");
/// assert_eq!(label.as_str(), "alpha");
/// assert_eq!(label.to_string(), "alpha");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Arc<str>);

impl Label {
    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

/// A vertex of a generated graph.
///
/// The identifier is the vertex's position in generation order, so a run
/// over `V` vertices yields identifiers `0..V`.
///
/// # Examples
/// ```
/// use randgraph_core::{Label, Vertex};
///
/// let vertex = Vertex::new(3).with_label("v3");
/// assert_eq!(vertex.id(), 3);
/// assert_eq!(vertex.label(), Some(&Label::from("v3")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    id: usize,
    label: Option<Label>,
}

impl Vertex {
    /// Creates an unlabelled vertex.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self { id, label: None }
    }

    /// Attaches a label to the vertex.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the vertex identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> usize { self.id }

    /// Returns the label, if one was assigned.
    #[must_use]
    #[rustfmt::skip]
    pub fn label(&self) -> Option<&Label> { self.label.as_ref() }
}

/// An edge connecting the vertices with identifiers `v0` and `v1`.
///
/// When [`Edge::directed`] is `true`, `v0` is the tail and `v1` the head.
/// Otherwise the endpoints are stored in generation order but should be read
/// as an unordered pair.
///
/// # Examples
/// ```
/// use randgraph_core::Edge;
///
/// let edge = Edge::new(0, 2, 5, true);
/// assert_eq!(edge.id(), 0);
/// assert_eq!((edge.v0(), edge.v1()), (2, 5));
/// assert!(edge.directed());
/// assert!(edge.label().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    id: usize,
    v0: usize,
    v1: usize,
    directed: bool,
    label: Option<Label>,
}

impl Edge {
    /// Creates an unlabelled edge.
    #[must_use]
    pub fn new(id: usize, v0: usize, v1: usize, directed: bool) -> Self {
        Self {
            id,
            v0,
            v1,
            directed,
            label: None,
        }
    }

    /// Attaches a label to the edge.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the edge identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> usize { self.id }

    /// Returns the first endpoint (the tail for directed edges).
    #[must_use]
    #[rustfmt::skip]
    pub fn v0(&self) -> usize { self.v0 }

    /// Returns the second endpoint (the head for directed edges).
    #[must_use]
    #[rustfmt::skip]
    pub fn v1(&self) -> usize { self.v1 }

    /// Returns whether the edge is directed.
    #[must_use]
    #[rustfmt::skip]
    pub fn directed(&self) -> bool { self.directed }

    /// Returns the label, if one was assigned.
    #[must_use]
    #[rustfmt::skip]
    pub fn label(&self) -> Option<&Label> { self.label.as_ref() }

    /// Returns whether both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.v0 == self.v1
    }
}
