//! Vertex pass of the binomial generator.

use std::{fmt, iter::FusedIterator};

use crate::element::Vertex;

use super::VertexLabeler;

/// Iterator over the vertices `0..V` of a [`super::Binomial`] pass.
#[derive(Clone)]
pub struct BinomialVertices {
    next: usize,
    end: usize,
    labeler: Option<VertexLabeler>,
}

impl BinomialVertices {
    pub(super) fn new(end: usize, labeler: Option<VertexLabeler>) -> Self {
        Self {
            next: 0,
            end,
            labeler,
        }
    }
}

impl Iterator for BinomialVertices {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        if self.next >= self.end {
            return None;
        }
        let id = self.next;
        self.next += 1;
        record_vertex();
        let vertex = Vertex::new(id);
        Some(match &self.labeler {
            Some(labeler) => vertex.with_label(labeler(id)),
            None => vertex,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BinomialVertices {}

impl FusedIterator for BinomialVertices {}

impl fmt::Debug for BinomialVertices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialVertices")
            .field("next", &self.next)
            .field("end", &self.end)
            .field("labeled", &self.labeler.is_some())
            .finish()
    }
}

#[cfg(feature = "metrics")]
fn record_vertex() {
    metrics::counter!("randgraph_vertices_emitted").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_vertex() {}
