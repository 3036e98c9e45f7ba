//! Property-based checks for binomial edge passes.
//!
//! Every generated configuration is checked for the structural guarantees a
//! pass must uphold regardless of the random draws: endpoint bounds, tail
//! ordering, loop and multiedge exclusion, and sequential identifiers.
//! Head ordering is only constrained when loops are disabled.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::{element::Edge, source::FixedSource, test_utils::suite_proptest_config};

use super::BinomialBuilder;

/// Generator flags sampled independently of the numeric parameters.
#[derive(Clone, Copy, Debug, Arbitrary)]
struct Flags {
    loops: bool,
    multiedges: bool,
    directed: bool,
}

/// Numeric parameters kept small enough to drain a pass quickly.
#[derive(Clone, Copy, Debug, Arbitrary)]
struct Shape {
    #[strategy(0_i64..24)]
    vertices: i64,
    #[strategy(0_i64..8)]
    trials: i64,
    #[strategy(0.0_f64..=1.0)]
    probability: f64,
}

fn edge_pass(shape: Shape, flags: Flags, seed: u64) -> (usize, Vec<Edge>) {
    let mut generator = BinomialBuilder::new(shape.vertices, shape.trials, shape.probability)
        .with_loops(flags.loops)
        .with_multiedges(flags.multiedges)
        .with_directed(flags.directed)
        .build_with_rng(SmallRng::seed_from_u64(seed))
        .expect("strategies only produce valid parameters");
    let pass = FixedSource::capture(&mut generator);
    (pass.vertex_list().len(), pass.edge_list().to_vec())
}

fn check_structure(shape: Shape, flags: Flags, seed: u64) -> Result<(), TestCaseError> {
    let (vertex_count, edges) = edge_pass(shape, flags, seed);
    prop_assert_eq!(i64::try_from(vertex_count).ok(), Some(shape.vertices));

    let per_tail_cap = usize::try_from(shape.trials).unwrap_or(usize::MAX);
    let mut previous_tail = 0_usize;
    let mut heads_for_tail: HashSet<usize> = HashSet::new();
    let mut out_degree = 0_usize;
    for (position, edge) in edges.iter().enumerate() {
        prop_assert_eq!(edge.id(), position);
        prop_assert!(edge.v0() < vertex_count && edge.v1() < vertex_count);
        prop_assert_eq!(edge.directed(), flags.directed);
        prop_assert!(edge.v0() >= previous_tail, "tails must not decrease");
        // With loops every head in `[0, V)` is admissible, including heads
        // below the tail.
        if !flags.loops {
            prop_assert!(edge.v1() > edge.v0());
        }

        if edge.v0() != previous_tail || position == 0 {
            heads_for_tail.clear();
            out_degree = 0;
        }
        previous_tail = edge.v0();
        out_degree += 1;
        prop_assert!(out_degree <= per_tail_cap);
        if !flags.multiedges {
            prop_assert!(
                heads_for_tail.insert(edge.v1()),
                "head {} repeated for tail {}",
                edge.v1(),
                edge.v0()
            );
        }
    }
    Ok(())
}

fn check_reproducible(shape: Shape, flags: Flags, seed: u64) -> Result<(), TestCaseError> {
    let (_, first) = edge_pass(shape, flags, seed);
    let (_, second) = edge_pass(shape, flags, seed);
    prop_assert_eq!(first, second);
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn edge_passes_respect_structure(shape: Shape, flags: Flags, seed: u64) {
        check_structure(shape, flags, seed)?;
    }

    #[test]
    fn seeded_passes_are_reproducible(shape: Shape, flags: Flags, seed: u64) {
        check_reproducible(shape, flags, seed)?;
    }

    #[test]
    fn certain_trials_fill_every_tail(
        vertices in 1_i64..16,
        trials in 1_i64..6,
        seed in any::<u64>()
    ) {
        let shape = Shape { vertices, trials, probability: 1.0 };
        let flags = Flags { loops: true, multiedges: true, directed: false };
        let (_, edges) = edge_pass(shape, flags, seed);
        prop_assert_eq!(i64::try_from(edges.len()).ok(), Some(vertices * trials));
    }
}

#[rstest::rstest]
#[case::sparse(Shape { vertices: 20, trials: 3, probability: 0.1 }, 42)]
#[case::dense(Shape { vertices: 20, trials: 7, probability: 0.9 }, 42)]
#[case::single(Shape { vertices: 1, trials: 5, probability: 1.0 }, 999)]
#[case::empty(Shape { vertices: 0, trials: 5, probability: 1.0 }, 999)]
fn structure_holds_for_every_flag_combination(#[case] shape: Shape, #[case] seed: u64) {
    for bits in 0_u8..8 {
        let flags = Flags {
            loops: bits & 1 != 0,
            multiedges: bits & 2 != 0,
            directed: bits & 4 != 0,
        };
        check_structure(shape, flags, seed)
            .unwrap_or_else(|err| panic!("{flags:?} violated structure: {err}"));
    }
}

#[rstest::rstest]
#[case::seed_42(42)]
#[case::seed_1(1)]
fn loops_admit_heads_below_the_tail(#[case] seed: u64) {
    let shape = Shape {
        vertices: 20,
        trials: 7,
        probability: 0.9,
    };
    let flags = Flags {
        loops: true,
        multiedges: false,
        directed: true,
    };
    let (_, edges) = edge_pass(shape, flags, seed);
    assert!(
        edges.iter().any(|edge| edge.v1() < edge.v0()),
        "a dense pass with loops must reach heads below some tail"
    );
    check_structure(shape, flags, seed)
        .unwrap_or_else(|err| panic!("loop pass violated structure: {err}"));
}
