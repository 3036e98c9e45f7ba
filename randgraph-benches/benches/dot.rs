//! DOT rendering benchmarks.
//!
//! Measures writing a full generated graph through [`RandGraph::write_dot`]
//! into a discarding writer, with and without labels.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use std::io;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use randgraph_benches::{error::BenchSetupError, params::GeneratorBenchParams};
use randgraph_core::{RandGraph, labels};

const PARAMS: GeneratorBenchParams = GeneratorBenchParams {
    vertices: 5_000,
    trials: 4,
    probability: 0.5,
    multiedges: false,
};

fn write_dot_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("write_dot");
    group.sample_size(20);

    let mut plain = RandGraph::new(PARAMS.build()?);
    group.bench_function(BenchmarkId::new("unlabeled", PARAMS), |b| {
        b.iter(|| plain.write_dot(io::sink()));
    });

    let mut labeled = RandGraph::new(PARAMS.build()?);
    let generator = labeled.source_mut();
    generator.set_vertex_labeler(Some(labels::cycled(["alpha", "beta", "gamma"])));
    generator.set_edge_labeler(Some(labels::edge_ids()));
    group.bench_function(BenchmarkId::new("labeled", PARAMS), |b| {
        b.iter(|| labeled.write_dot(io::sink()));
    });

    group.finish();
    Ok(())
}

fn write_dot(c: &mut Criterion) {
    if let Err(err) = write_dot_impl(c) {
        panic!("write_dot benchmark setup failed: {err}");
    }
}

criterion_group!(benches, write_dot);
criterion_main!(benches);
