//! Randgraph core library.
//!
//! Random graphs are produced as lazy streams of vertices and edges rather
//! than as an in-memory adjacency structure, so graphs of any size can be
//! consumed incrementally, e.g. rendered straight to DOT.
//!
//! # Determinism
//!
//! A [`Binomial`] generator built with the same parameters and the same seed
//! (or an identically seeded injected random source) yields identical vertex
//! and edge passes. Without a seed the random source is drawn from OS entropy.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the generator emits:
//!
//! - `randgraph_vertices_emitted` (counter)
//! - `randgraph_edges_emitted` (counter)
//! - `randgraph_trials_discarded` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod binomial;
pub mod dot;
mod element;
mod error;
mod graph;
pub mod handoff;
pub mod labels;
mod source;

#[cfg(test)]
mod test_utils;

pub use crate::{
    binomial::{
        Binomial, BinomialBuilder, BinomialEdges, BinomialVertices, EdgeLabeler, VertexLabeler,
    },
    element::{Edge, Label, Vertex},
    error::{InvalidParameter, InvalidParameterCode, Result},
    graph::RandGraph,
    source::{FixedSource, Source},
};
