use randgraph_core::{Binomial, BinomialBuilder, Edge, FixedSource, Vertex};
use rand::{SeedableRng, rngs::SmallRng};

/// Seed shared by tests that only need a reproducible pass.
pub const SEED: u64 = 0x5eed;

/// Builds a generator from `builder` with a fixed [`SmallRng`] seed.
#[must_use]
pub fn seeded(builder: BinomialBuilder) -> Binomial<SmallRng> {
    builder
        .build_with_rng(SmallRng::seed_from_u64(SEED))
        .expect("test parameters are valid")
}

/// Reduces an edge pass to its `(v0, v1)` endpoints.
#[must_use]
pub fn endpoints(edges: impl IntoIterator<Item = Edge>) -> Vec<(usize, usize)> {
    edges.into_iter().map(|edge| (edge.v0(), edge.v1())).collect()
}

/// Three labelled vertices joined by one directed and one undirected edge.
#[must_use]
pub fn triangle_fragment() -> FixedSource {
    FixedSource::new(
        vec![
            Vertex::new(0).with_label("a"),
            Vertex::new(1).with_label("b"),
            Vertex::new(2),
        ],
        vec![
            Edge::new(0, 0, 1, true).with_label("first"),
            Edge::new(1, 1, 2, false),
        ],
    )
}
