//! Acyclic backbone strategies: chain, layered tiers, and random DAG.
//!
//! Every edge points forward in a hidden topological order, so the result is
//! acyclic by construction. Layered and random graphs register their nodes
//! in a shuffled order first, so universe order and topological order differ.

use cyclegraph_core::Graph;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Node label for position `i`.
pub fn label(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}

/// `0 -> 1 -> ... -> n-1`, registered in path order.
pub fn chain(num_nodes: usize) -> Graph<u32> {
    let mut graph = Graph::new();
    for i in 0..num_nodes {
        graph.add_node(label(i));
        if i > 0 {
            graph.add_edge(label(i - 1), label(i));
        }
    }
    graph
}

/// Splits `0..n` into `layers` contiguous tiers and wires each node to
/// later tiers. Four out of five edges land in the next tier.
pub fn layered(num_nodes: usize, layers: usize, avg_out_degree: f64, rng: &mut StdRng) -> Graph<u32> {
    let layers = layers.clamp(1, num_nodes.max(1));
    let bounds: Vec<usize> = (0..=layers).map(|l| l * num_nodes / layers).collect();
    let mut graph = with_shuffled_universe(num_nodes, rng);

    for layer in 0..layers.saturating_sub(1) {
        for node in bounds[layer]..bounds[layer + 1] {
            for _ in 0..out_degree(avg_out_degree, rng) {
                let target_layer = if rng.gen_bool(0.8) {
                    layer + 1
                } else {
                    rng.gen_range(layer + 1..layers)
                };
                let (lo, hi) = (bounds[target_layer], bounds[target_layer + 1]);
                if lo < hi {
                    graph.add_edge(label(node), label(rng.gen_range(lo..hi)));
                }
            }
        }
    }
    graph
}

/// Random DAG: a shuffled permutation fixes the topological order and each
/// node draws its successors from the positions after it.
pub fn random_dag(num_nodes: usize, avg_out_degree: f64, rng: &mut StdRng) -> Graph<u32> {
    let mut order: Vec<u32> = (0..num_nodes).map(label).collect();
    order.shuffle(rng);
    let mut graph = with_shuffled_universe(num_nodes, rng);

    for i in 0..num_nodes.saturating_sub(1) {
        for _ in 0..out_degree(avg_out_degree, rng) {
            let j = rng.gen_range(i + 1..num_nodes);
            graph.add_edge(order[i], order[j]);
        }
    }
    graph
}

fn with_shuffled_universe(num_nodes: usize, rng: &mut StdRng) -> Graph<u32> {
    let mut labels: Vec<u32> = (0..num_nodes).map(label).collect();
    labels.shuffle(rng);
    let mut graph = Graph::new();
    for l in labels {
        graph.add_node(l);
    }
    graph
}

/// Uniform in `0..=2*avg`, so the mean is `avg`.
fn out_degree(avg: f64, rng: &mut StdRng) -> usize {
    let max = (avg.max(0.0) * 2.0).round() as usize;
    rng.gen_range(0..=max)
}
