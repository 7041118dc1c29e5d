//! Dependency graph generator.
//!
//! Produces [`Graph<u32>`] instances with a chosen topology and, optionally,
//! a number of injected cycles. The same [`GeneratorConfig`] always yields
//! the same graph, universe order included.

pub mod injection;
pub mod topology;

use cyclegraph_core::Graph;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shape of the acyclic backbone before any cycles are injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// A single path `0 -> 1 -> ... -> n-1`. Maximises DFS depth.
    Chain,
    /// Nodes split into tiers; edges only point to later tiers, mostly the
    /// next one.
    Layered {
        /// Number of tiers.
        layers: usize,
    },
    /// Random DAG over a shuffled node order.
    Random,
}

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of nodes.
    pub num_nodes: usize,
    /// Acyclic backbone shape.
    pub topology: Topology,
    /// Average outgoing edges per node (ignored by [`Topology::Chain`]).
    pub avg_out_degree: f64,
    /// Number of back edges to add, each closing at least one cycle.
    pub injected_cycles: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 nodes, ~300 edges
    Small,
    /// 1,000 nodes, ~3,000 edges
    Medium,
    /// 10,000 nodes, ~30,000 edges
    Large,
    /// 100,000 nodes, ~300,000 edges
    XLarge,
}

impl SizeTier {
    /// Node count for this tier.
    pub fn num_nodes(self) -> usize {
        match self {
            SizeTier::Small => 100,
            SizeTier::Medium => 1_000,
            SizeTier::Large => 10_000,
            SizeTier::XLarge => 100_000,
        }
    }

    /// Returns the default acyclic [`GeneratorConfig`] for this tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let num_nodes = self.num_nodes();
        GeneratorConfig {
            seed,
            num_nodes,
            topology: Topology::Layered {
                layers: layers_for(num_nodes),
            },
            avg_out_degree: 3.0,
            injected_cycles: 0,
        }
    }

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }
}

/// Roughly `sqrt(n)` tiers, at least one.
fn layers_for(num_nodes: usize) -> usize {
    let mut layers = 1;
    while (layers + 1) * (layers + 1) <= num_nodes {
        layers += 1;
    }
    layers
}

/// Generates a graph from `config`.
pub fn generate_graph(config: &GeneratorConfig) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = match config.topology {
        Topology::Chain => topology::chain(config.num_nodes),
        Topology::Layered { layers } => {
            topology::layered(config.num_nodes, layers, config.avg_out_degree, &mut rng)
        }
        Topology::Random => topology::random_dag(config.num_nodes, config.avg_out_degree, &mut rng),
    };
    if config.injected_cycles > 0 {
        injection::inject_cycles(&mut graph, config.injected_cycles, &mut rng);
    }
    graph
}
