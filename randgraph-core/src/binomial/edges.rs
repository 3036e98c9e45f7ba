//! Edge pass of the binomial generator.

use std::{collections::HashSet, fmt, iter::FusedIterator};

use rand::{Rng, RngCore, distributions::Standard};
use tracing::{debug, trace};

use crate::element::Edge;

use super::Config;

/// Iterator over the edges of one [`super::Binomial`] pass.
///
/// Tails are visited in increasing order and each runs its trials to
/// completion before the next tail starts, so the emission order is fully
/// determined by the random source. `G` is either the generator's own random
/// source (owned pass) or a mutable borrow of it.
pub struct BinomialEdges<G> {
    config: Config,
    rng: G,
    tail: usize,
    trial: usize,
    used_heads: HashSet<usize>,
    emitted: usize,
    discarded: usize,
    finished: bool,
}

impl<G: RngCore> BinomialEdges<G> {
    pub(super) fn new(config: Config, rng: G) -> Self {
        Self {
            config,
            rng,
            tail: 0,
            trial: 0,
            used_heads: HashSet::new(),
            emitted: 0,
            discarded: 0,
            finished: false,
        }
    }

    /// Returns the number of edges emitted so far in this pass.
    #[must_use]
    #[rustfmt::skip]
    pub fn emitted(&self) -> usize { self.emitted }

    /// Returns the number of successful trials dropped so far because their
    /// head was already used by the same tail.
    #[must_use]
    #[rustfmt::skip]
    pub fn discarded(&self) -> usize { self.discarded }

    /// First admissible head for the current tail, or `None` once no tail at
    /// or after the current one can have heads.
    fn head_start(&self) -> Option<usize> {
        if self.tail >= self.config.vertices {
            return None;
        }
        let start = if self.config.loops { 0 } else { self.tail + 1 };
        (start < self.config.vertices).then_some(start)
    }

    fn advance_tail(&mut self) {
        self.tail += 1;
        self.trial = 0;
        self.used_heads.clear();
    }

    fn run_trial(&mut self, start: usize) -> Option<Edge> {
        let draw: f64 = self.rng.sample(Standard);
        if draw >= self.config.probability {
            return None;
        }

        let head = self.rng.gen_range(start..self.config.vertices);
        if !self.config.multiedges && !self.used_heads.insert(head) {
            self.discarded += 1;
            record_discard();
            trace!(tail = self.tail, head, "discarded duplicate head");
            return None;
        }

        let id = self.emitted;
        self.emitted += 1;
        record_edge();
        let edge = Edge::new(id, self.tail, head, self.config.directed);
        Some(match &self.config.edge_labeler {
            Some(labeler) => edge.with_label(labeler(id, self.tail, head)),
            None => edge,
        })
    }

    fn finish(&mut self) {
        self.finished = true;
        self.used_heads = HashSet::new();
        debug!(
            emitted = self.emitted,
            discarded = self.discarded,
            tails = self.tail,
            "edge pass finished"
        );
    }
}

impl<G: RngCore> Iterator for BinomialEdges<G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        while !self.finished {
            let Some(start) = self.head_start() else {
                self.finish();
                break;
            };
            if self.trial >= self.config.trials {
                self.advance_tail();
                continue;
            }
            self.trial += 1;
            if let Some(edge) = self.run_trial(start) {
                return Some(edge);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished || self.head_start().is_none() {
            return (0, Some(0));
        }
        // Each remaining trial yields at most one edge.
        let tail_end = if self.config.loops {
            self.config.vertices
        } else {
            self.config.vertices - 1
        };
        let later_tails = tail_end - self.tail - 1;
        let upper = later_tails
            .checked_mul(self.config.trials)
            .and_then(|later| later.checked_add(self.config.trials - self.trial));
        (0, upper)
    }
}

impl<G: RngCore> FusedIterator for BinomialEdges<G> {}

impl<G> fmt::Debug for BinomialEdges<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialEdges")
            .field("tail", &self.tail)
            .field("trial", &self.trial)
            .field("emitted", &self.emitted)
            .field("discarded", &self.discarded)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
fn record_edge() {
    metrics::counter!("randgraph_edges_emitted").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_edge() {}

#[cfg(feature = "metrics")]
fn record_discard() {
    metrics::counter!("randgraph_trials_discarded").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_discard() {}
