//! Ready-made labeling strategies for [`crate::Binomial`].
//!
//! # Examples
//! ```
//! use randgraph_core::{BinomialBuilder, labels};
//!
//! let generator = BinomialBuilder::new(3, 0, 0.0)
//!     .with_vertex_labeler(labels::cycled(["a", "b"]))
//!     .build()
//!     .expect("parameters are valid");
//! let names: Vec<String> = generator
//!     .vertices()
//!     .filter_map(|v| v.label().map(ToString::to_string))
//!     .collect();
//! assert_eq!(names, ["a", "b", "a2"]);
//! ```

use std::sync::Arc;

use crate::{
    binomial::{EdgeLabeler, VertexLabeler},
    element::Label,
};

/// Labels every vertex with its decimal identifier.
#[must_use]
pub fn vertex_ids() -> VertexLabeler {
    Arc::new(|id: usize| Label::from(id.to_string()))
}

/// Labels vertices by cycling through `names`.
///
/// Vertex `i` receives `names[i % names.len()]`; once the list wraps, the
/// vertex identifier is appended so labels stay unique (`a`, `b`, `a2`,
/// `b3`, ...). An empty list falls back to [`vertex_ids`].
#[must_use]
pub fn cycled<I, S>(names: I) -> VertexLabeler
where
    I: IntoIterator<Item = S>,
    S: Into<Label>,
{
    let names: Vec<Label> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
        return vertex_ids();
    }
    Arc::new(move |id: usize| cycled_label(&names, id))
}

fn cycled_label(names: &[Label], id: usize) -> Label {
    let Some(base) = names.get(id % names.len()) else {
        return Label::from(id.to_string());
    };
    if id < names.len() {
        base.clone()
    } else {
        Label::from(format!("{base}{id}"))
    }
}

/// Labels every edge `e<id>`.
#[must_use]
pub fn edge_ids() -> EdgeLabeler {
    Arc::new(|id: usize, _v0: usize, _v1: usize| Label::from(format!("e{id}")))
}
