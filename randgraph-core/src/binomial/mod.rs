//! Binomial random graph generator.
//!
//! Every tail vertex runs `N` independent Bernoulli trials with success
//! probability `P`; each success draws a head uniformly from the admissible
//! range and emits an edge. The number of edges leaving a tail therefore
//! follows `Binomial(N, P)` unless multiedges are disabled, in which case
//! trials landing on an already used head are dropped without a retry and the
//! per-tail count is left-censored.

mod edges;
mod vertices;

#[cfg(test)]
mod property;

use std::{fmt, sync::Arc};

use rand::{RngCore, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{Result, element::Label, error::InvalidParameter, source::Source};

pub use edges::BinomialEdges;
pub use vertices::BinomialVertices;

/// Strategy producing a vertex label from the vertex identifier.
pub type VertexLabeler = Arc<dyn Fn(usize) -> Label + Send + Sync>;

/// Strategy producing an edge label from `(id, v0, v1)`.
pub type EdgeLabeler = Arc<dyn Fn(usize, usize, usize) -> Label + Send + Sync>;

/// Configures and constructs [`Binomial`] generators.
///
/// Counts are accepted as signed integers so that callers forwarding
/// untrusted input receive [`InvalidParameter`] instead of wrapping.
///
/// # Examples
/// ```
/// use randgraph_core::{BinomialBuilder, Source};
///
/// let mut generator = BinomialBuilder::new(2, 1, 1.0)
///     .with_directed(true)
///     .with_seed(7)
///     .build()
///     .expect("parameters are valid");
/// let edges: Vec<_> = generator.edges().map(|e| (e.v0(), e.v1())).collect();
/// assert_eq!(edges, [(0, 1)]);
/// ```
#[derive(Clone, Default)]
pub struct BinomialBuilder {
    vertices: i64,
    trials: i64,
    probability: f64,
    loops: bool,
    multiedges: bool,
    directed: bool,
    vertex_labeler: Option<VertexLabeler>,
    edge_labeler: Option<EdgeLabeler>,
    seed: Option<u64>,
}

impl fmt::Debug for BinomialBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialBuilder")
            .field("vertices", &self.vertices)
            .field("trials", &self.trials)
            .field("probability", &self.probability)
            .field("loops", &self.loops)
            .field("multiedges", &self.multiedges)
            .field("directed", &self.directed)
            .field("vertex_labeler", &self.vertex_labeler.is_some())
            .field("edge_labeler", &self.edge_labeler.is_some())
            .field("seed", &self.seed)
            .finish()
    }
}

impl BinomialBuilder {
    /// Creates a builder for `vertices` vertices, `trials` trials per tail
    /// and success probability `probability`. All flags start disabled.
    #[must_use]
    pub fn new(vertices: i64, trials: i64, probability: f64) -> Self {
        Self {
            vertices,
            trials,
            probability,
            ..Self::default()
        }
    }

    /// Allows edges whose head equals their tail.
    #[must_use]
    pub fn with_loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// Allows several edges between the same tail and head.
    #[must_use]
    pub fn with_multiedges(mut self, multiedges: bool) -> Self {
        self.multiedges = multiedges;
        self
    }

    /// Tags emitted edges as directed.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Labels each vertex with `labeler(id)`.
    #[must_use]
    pub fn with_vertex_labeler(mut self, labeler: VertexLabeler) -> Self {
        self.vertex_labeler = Some(labeler);
        self
    }

    /// Labels each emitted edge with `labeler(id, v0, v1)`.
    #[must_use]
    pub fn with_edge_labeler(mut self, labeler: EdgeLabeler) -> Self {
        self.edge_labeler = Some(labeler);
        self
    }

    /// Seeds the default random source so passes are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the requested vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> i64 { self.vertices }

    /// Returns the requested number of trials per tail.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials(&self) -> i64 { self.trials }

    /// Returns the requested success probability.
    #[must_use]
    #[rustfmt::skip]
    pub fn probability(&self) -> f64 { self.probability }

    /// Returns whether loops will be allowed.
    #[must_use]
    #[rustfmt::skip]
    pub fn loops(&self) -> bool { self.loops }

    /// Returns whether multiedges will be allowed.
    #[must_use]
    #[rustfmt::skip]
    pub fn multiedges(&self) -> bool { self.multiedges }

    /// Returns whether edges will be tagged as directed.
    #[must_use]
    #[rustfmt::skip]
    pub fn directed(&self) -> bool { self.directed }

    /// Returns the seed for the default random source, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Validates the configuration and constructs a generator backed by
    /// [`SmallRng`], seeded from [`Self::with_seed`] or from OS entropy.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] when the trial count or vertex count is
    /// negative, or the probability lies outside `[0, 1]`.
    pub fn build(self) -> Result<Binomial<SmallRng>> {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.build_with_rng(rng)
    }

    /// Validates the configuration and constructs a generator drawing from
    /// `rng`. Any seed set on the builder is ignored.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] under the same conditions as
    /// [`Self::build`].
    #[instrument(
        name = "core.binomial.build",
        err,
        skip(self, rng),
        fields(
            vertices = self.vertices,
            trials = self.trials,
            probability = self.probability,
            loops = self.loops,
            multiedges = self.multiedges,
            directed = self.directed,
        ),
    )]
    pub fn build_with_rng<R: RngCore>(self, rng: R) -> Result<Binomial<R>> {
        let trials = usize::try_from(self.trials)
            .map_err(|_| InvalidParameter::TrialCount { got: self.trials })?;
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(InvalidParameter::Probability {
                got: self.probability,
            });
        }
        let vertices = usize::try_from(self.vertices)
            .map_err(|_| InvalidParameter::VertexCount { got: self.vertices })?;

        debug!("binomial generator configured");
        Ok(Binomial {
            config: Config {
                vertices,
                trials,
                probability: self.probability,
                loops: self.loops,
                multiedges: self.multiedges,
                directed: self.directed,
                vertex_labeler: self.vertex_labeler,
                edge_labeler: self.edge_labeler,
            },
            rng,
        })
    }
}

#[derive(Clone)]
pub(crate) struct Config {
    pub(crate) vertices: usize,
    pub(crate) trials: usize,
    pub(crate) probability: f64,
    pub(crate) loops: bool,
    pub(crate) multiedges: bool,
    pub(crate) directed: bool,
    pub(crate) vertex_labeler: Option<VertexLabeler>,
    pub(crate) edge_labeler: Option<EdgeLabeler>,
}

/// Random graph [`Source`] where the out-degree of each tail vertex follows
/// a binomial distribution.
///
/// The generator is reusable: every call to [`Source::edges`] runs a new pass
/// that continues drawing from the same random source, so consecutive passes
/// differ while two generators built with the same seed produce identical
/// passes.
///
/// # Examples
/// ```
/// use randgraph_core::{Binomial, Source};
///
/// let mut generator = Binomial::new(4, 3, 0.5)?;
/// generator.set_loops(true);
/// assert_eq!(generator.vertices().count(), 4);
/// assert!(generator.edges().all(|e| e.v0() < 4 && e.v1() < 4));
/// # Ok::<(), randgraph_core::InvalidParameter>(())
/// ```
pub struct Binomial<R = SmallRng> {
    config: Config,
    rng: R,
}

impl Binomial<SmallRng> {
    /// Creates an entropy-seeded generator with loops, multiedges and
    /// direction disabled.
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] when `vertices` or `trials` is negative
    /// or `probability` lies outside `[0, 1]`.
    pub fn new(vertices: i64, trials: i64, probability: f64) -> Result<Self> {
        BinomialBuilder::new(vertices, trials, probability).build()
    }
}

impl<R> Binomial<R> {
    /// Returns the number of vertices per pass.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.config.vertices }

    /// Returns the number of trials per tail vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn trial_count(&self) -> usize { self.config.trials }

    /// Returns the per-trial success probability.
    #[must_use]
    #[rustfmt::skip]
    pub fn probability(&self) -> f64 { self.config.probability }

    /// Returns whether loops are allowed.
    #[must_use]
    #[rustfmt::skip]
    pub fn loops(&self) -> bool { self.config.loops }

    /// Returns whether multiedges are allowed.
    #[must_use]
    #[rustfmt::skip]
    pub fn multiedges(&self) -> bool { self.config.multiedges }

    /// Returns whether emitted edges are directed.
    #[must_use]
    #[rustfmt::skip]
    pub fn directed(&self) -> bool { self.config.directed }

    /// Allows or forbids loops for subsequent passes.
    pub fn set_loops(&mut self, loops: bool) {
        self.config.loops = loops;
    }

    /// Allows or forbids multiedges for subsequent passes.
    pub fn set_multiedges(&mut self, multiedges: bool) {
        self.config.multiedges = multiedges;
    }

    /// Sets the directed flag for subsequent passes.
    pub fn set_directed(&mut self, directed: bool) {
        self.config.directed = directed;
    }

    /// Replaces the vertex labeling strategy; `None` leaves vertices unlabelled.
    pub fn set_vertex_labeler(&mut self, labeler: Option<VertexLabeler>) {
        self.config.vertex_labeler = labeler;
    }

    /// Replaces the edge labeling strategy; `None` leaves edges unlabelled.
    pub fn set_edge_labeler(&mut self, labeler: Option<EdgeLabeler>) {
        self.config.edge_labeler = labeler;
    }

    /// Replaces the random source, returning the previous one.
    pub fn set_rng(&mut self, rng: R) -> R {
        std::mem::replace(&mut self.rng, rng)
    }

    /// Starts a vertex pass. Vertices do not consume randomness.
    #[must_use]
    pub fn vertices(&self) -> BinomialVertices {
        BinomialVertices::new(self.config.vertices, self.config.vertex_labeler.clone())
    }
}

impl<R: RngCore> Binomial<R> {
    /// Starts an edge pass drawing from the generator's random source.
    pub fn edges(&mut self) -> BinomialEdges<&mut R> {
        BinomialEdges::new(self.config.clone(), &mut self.rng)
    }

    /// Consumes the generator into an owned edge pass, e.g. to move it onto
    /// another thread with [`crate::handoff::spawn`].
    #[must_use]
    pub fn into_edges(self) -> BinomialEdges<R> {
        BinomialEdges::new(self.config, self.rng)
    }
}

impl<R: RngCore> Source for Binomial<R> {
    type Vertices = BinomialVertices;
    type Edges<'a>
        = BinomialEdges<&'a mut R>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices {
        Self::vertices(self)
    }

    fn edges(&mut self) -> Self::Edges<'_> {
        Self::edges(self)
    }
}

impl<R> fmt::Debug for Binomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binomial")
            .field("vertices", &self.config.vertices)
            .field("trials", &self.config.trials)
            .field("probability", &self.config.probability)
            .field("loops", &self.config.loops)
            .field("multiedges", &self.config.multiedges)
            .field("directed", &self.config.directed)
            .field("vertex_labeler", &self.config.vertex_labeler.is_some())
            .field("edge_labeler", &self.config.edge_labeler.is_some())
            .finish_non_exhaustive()
    }
}
