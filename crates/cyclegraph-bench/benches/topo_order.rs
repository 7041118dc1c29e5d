//! Topological ordering, cycle reporting, and adjacency parsing benchmarks.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cyclegraph_bench::{GeneratorConfig, SizeTier, generate_graph, to_adjacency_json};
use cyclegraph_core::{find_cycle, parse_adjacency, topological_order_or_cycle};

const TIERS: [SizeTier; 4] = [
    SizeTier::Small,
    SizeTier::Medium,
    SizeTier::Large,
    SizeTier::XLarge,
];

fn bench_topological_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_order");
    for tier in TIERS {
        let acyclic = generate_graph(&tier.config(42));
        let cyclic = generate_graph(&GeneratorConfig {
            injected_cycles: 3,
            ..tier.config(42)
        });

        group.bench_function(BenchmarkId::new("acyclic", tier.label()), |b| {
            b.iter(|| topological_order_or_cycle(black_box(&acyclic)).expect("acyclic"));
        });
        group.bench_function(BenchmarkId::new("cyclic", tier.label()), |b| {
            b.iter(|| topological_order_or_cycle(black_box(&cyclic)).expect_err("cyclic"));
        });
    }
    group.finish();
}

fn bench_find_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_cycle");
    for tier in TIERS {
        let acyclic = generate_graph(&tier.config(42));
        let cyclic = generate_graph(&GeneratorConfig {
            injected_cycles: 3,
            ..tier.config(42)
        });

        group.bench_function(BenchmarkId::new("acyclic", tier.label()), |b| {
            b.iter(|| find_cycle(black_box(&acyclic)));
        });
        group.bench_function(BenchmarkId::new("cyclic", tier.label()), |b| {
            b.iter(|| find_cycle(black_box(&cyclic)).expect("cycle"));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_adjacency");
    for tier in TIERS {
        let json = to_adjacency_json(&generate_graph(&tier.config(42))).expect("renders");
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_function(BenchmarkId::new("json", tier.label()), |b| {
            b.iter(|| parse_adjacency(black_box(&json)).expect("parses"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_topological_order, bench_find_cycle, bench_parse);
criterion_main!(benches);
