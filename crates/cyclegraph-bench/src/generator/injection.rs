//! Cycle injection: closes random forward walks with a back edge.

use cyclegraph_core::Graph;
use rand::Rng;
use rand::rngs::StdRng;

/// Longest walk followed before closing a cycle.
const MAX_WALK: usize = 8;

/// Adds up to `count` back edges to `graph`, each closing a cycle.
///
/// Each attempt picks a random start node, follows between 1 and
/// [`MAX_WALK`] random successor edges, and links the node it reached back
/// to the start. Walks that stall on a sink are retried, up to `16 * count`
/// attempts in total. Returns the number of edges actually added.
pub fn inject_cycles(graph: &mut Graph<u32>, count: usize, rng: &mut StdRng) -> usize {
    if graph.is_empty() {
        return 0;
    }
    let mut injected = 0;
    let mut attempts = 0;
    while injected < count && attempts < count.saturating_mul(16) {
        attempts += 1;
        let start = graph.nodes()[rng.gen_range(0..graph.node_count())];
        let mut current = start;
        let mut walked = 0;
        for _ in 0..rng.gen_range(1..=MAX_WALK) {
            let successors: Vec<u32> = graph.successors(&current).copied().collect();
            if successors.is_empty() {
                break;
            }
            current = successors[rng.gen_range(0..successors.len())];
            walked += 1;
        }
        if walked > 0 {
            graph.add_edge(current, start);
            injected += 1;
        }
    }
    injected
}

#[cfg(test)]
mod tests {
    use cyclegraph_core::{find_cycle, has_cycle_iterative};
    use rand::SeedableRng;

    use super::super::topology::chain;
    use super::*;

    #[test]
    fn injection_makes_chain_cyclic() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut g = chain(20);
        assert_eq!(inject_cycles(&mut g, 3, &mut rng), 3);
        assert_eq!(g.edge_count(), 19 + 3);
        assert!(has_cycle_iterative(&g));
        assert!(find_cycle(&g).is_some());
    }

    #[test]
    fn single_isolated_node_cannot_host_a_cycle() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut g = chain(1);
        assert_eq!(inject_cycles(&mut g, 2, &mut rng), 0);
        assert!(!has_cycle_iterative(&g));
    }

    #[test]
    fn empty_graph_is_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut g = Graph::new();
        assert_eq!(inject_cycles(&mut g, 5, &mut rng), 0);
        assert!(g.is_empty());
    }
}
