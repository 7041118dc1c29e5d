//! Kahn's algorithm: topological ordering with cycle detection as a side effect.
//!
//! The reduction computes an in-degree table over every edge (duplicates
//! count twice), seeds a FIFO worklist with all in-degree-zero nodes in
//! universe order, then repeatedly pops the front node, emits it and
//! decrements the in-degree of each successor edge in listed order. A
//! successor whose in-degree reaches zero joins the back of the worklist.
//!
//! If every node is emitted, the emitted sequence is a topological order. If
//! the worklist runs dry first, every node left over either lies on a cycle or
//! is only reachable through one, and the graph is cyclic.
//!
//! # Tie-Break
//!
//! FIFO over universe order. For `{0: [1, 2], 1: [3], 2: [3], 3: []}` the
//! order is `[0, 1, 2, 3]`.
use std::collections::VecDeque;
use std::fmt;

use super::Graph;

/// Returned by [`topological_order_or_cycle`] when the graph is cyclic.
///
/// This is an expected outcome, not a fault: it carries the partial order
/// that could be established and the nodes that could not be ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDetected<N> {
    /// Nodes emitted before the worklist ran dry, in emission order.
    pub emitted: Vec<N>,
    /// Nodes that were never emitted, in universe order. Never empty.
    pub remaining: Vec<N>,
}

impl<N> CycleDetected<N> {
    /// Total number of nodes in the graph that was reduced.
    pub fn node_count(&self) -> usize {
        self.emitted.len() + self.remaining.len()
    }
}

impl<N: fmt::Debug> fmt::Display for CycleDetected<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycle detected: {} of {} nodes cannot be ordered: {:?}",
            self.remaining.len(),
            self.node_count(),
            self.remaining
        )
    }
}

impl<N: fmt::Debug> std::error::Error for CycleDetected<N> {}

/// Computes a topological order of `graph`, or reports that it is cyclic.
///
/// On success every node appears exactly once and every edge points from an
/// earlier to a later position. A cyclic graph always yields
/// `Err(CycleDetected)`; a partial order is never returned as `Ok`.
///
/// # Errors
///
/// Returns [`CycleDetected`] when fewer than `node_count()` nodes could be
/// emitted.
pub fn topological_order_or_cycle<N: Clone>(graph: &Graph<N>) -> Result<Vec<N>, CycleDetected<N>> {
    let reduction = reduce(graph);
    let emitted: Vec<N> = reduction
        .order
        .iter()
        .map(|&position| graph.node_at(position).clone())
        .collect();

    if reduction.is_complete() {
        return Ok(emitted);
    }

    let remaining: Vec<N> = reduction
        .emitted
        .iter()
        .enumerate()
        .filter(|&(_, &done)| !done)
        .map(|(position, _)| graph.node_at(position).clone())
        .collect();

    Err(CycleDetected { emitted, remaining })
}

/// Returns `true` if `graph` contains a cycle, using Kahn's reduction.
pub fn has_cycle_kahn<N>(graph: &Graph<N>) -> bool {
    !reduce(graph).is_complete()
}

/// Positional outcome of one Kahn reduction.
struct Reduction {
    order: Vec<usize>,
    emitted: Vec<bool>,
}

impl Reduction {
    fn is_complete(&self) -> bool {
        self.order.len() == self.emitted.len()
    }
}

fn reduce<N>(graph: &Graph<N>) -> Reduction {
    let node_count = graph.node_count();

    let mut in_degree = vec![0usize; node_count];
    for position in 0..node_count {
        for &successor in graph.successor_positions(position) {
            in_degree[successor] += 1;
        }
    }

    let mut worklist: VecDeque<usize> = (0..node_count)
        .filter(|&position| in_degree[position] == 0)
        .collect();

    let mut order = Vec::with_capacity(node_count);
    let mut emitted = vec![false; node_count];

    while let Some(node) = worklist.pop_front() {
        order.push(node);
        emitted[node] = true;

        for &successor in graph.successor_positions(node) {
            let degree = &mut in_degree[successor];
            if *degree > 0 {
                *degree -= 1;
                if *degree == 0 {
                    worklist.push_back(successor);
                }
            }
        }
    }

    tracing::debug!(
        nodes = node_count,
        emitted = order.len(),
        cyclic = order.len() != node_count,
        "Kahn reduction finished"
    );

    Reduction { order, emitted }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::collections::HashMap;

    use super::*;

    fn graph(adjacency: &[(u32, &[u32])]) -> Graph<u32> {
        adjacency
            .iter()
            .map(|&(node, successors)| (node, successors.to_vec()))
            .collect()
    }

    fn assert_valid_order(g: &Graph<u32>, order: &[u32]) {
        assert_eq!(order.len(), g.node_count(), "order must cover every node");
        let position: HashMap<u32, usize> =
            order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        assert_eq!(position.len(), order.len(), "order has duplicates");
        for (from, to) in g.edges() {
            assert!(
                position[from] < position[to],
                "edge {from} -> {to} violated by {order:?}"
            );
        }
    }

    #[test]
    fn test_diamond_order_follows_tie_break() {
        let g = graph(&[(0, &[1, 2]), (1, &[3]), (2, &[3]), (3, &[])]);
        let order = topological_order_or_cycle(&g).expect("diamond is acyclic");
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_valid_order(&g, &order);
    }

    /// Listing 2 before 1 flips the tie-break but keeps 0 first and 3 last.
    #[test]
    fn test_successor_order_drives_tie_break() {
        let g = graph(&[(0, &[2, 1]), (1, &[3]), (2, &[3]), (3, &[])]);
        let order = topological_order_or_cycle(&g).expect("acyclic");
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_ring_reports_cycle() {
        let g = graph(&[(0, &[1]), (1, &[2]), (2, &[3]), (3, &[0])]);
        let err = topological_order_or_cycle(&g).expect_err("ring is cyclic");
        assert!(err.emitted.len() < 4);
        assert!(err.emitted.is_empty());
        assert_eq!(err.remaining, vec![0, 1, 2, 3]);
        assert!(has_cycle_kahn(&g));
    }

    #[test]
    fn test_empty_graph_has_empty_order() {
        let order = topological_order_or_cycle(&Graph::<u32>::new()).expect("empty is acyclic");
        assert!(order.is_empty());
    }

    #[test]
    fn test_isolated_nodes_keep_universe_order() {
        let g = graph(&[(3, &[]), (1, &[]), (2, &[])]);
        assert_eq!(topological_order_or_cycle(&g).expect("acyclic"), vec![3, 1, 2]);
    }

    #[test]
    fn test_self_loop_is_never_emitted() {
        let g = graph(&[(0, &[1]), (1, &[1]), (2, &[0])]);
        let err = topological_order_or_cycle(&g).expect_err("self-loop");
        assert_eq!(err.emitted, vec![2, 0]);
        assert_eq!(err.remaining, vec![1]);
    }

    /// Nodes downstream of a cycle are also left over.
    #[test]
    fn test_partial_order_before_cycle() {
        let g = graph(&[(0, &[1]), (1, &[2]), (2, &[]), (3, &[4]), (4, &[5]), (5, &[3])]);
        let err = topological_order_or_cycle(&g).expect_err("second component cycles");
        assert_eq!(err.emitted, vec![0, 1, 2]);
        assert_eq!(err.remaining, vec![3, 4, 5]);
        assert_eq!(err.node_count(), 6);
    }

    #[test]
    fn test_duplicate_edges_count_twice() {
        let g = graph(&[(0, &[1, 1]), (1, &[2]), (2, &[])]);
        let order = topological_order_or_cycle(&g).expect("acyclic");
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_long_chain_orders_every_node() {
        let chain: Graph<u32> = (0..10_000u32).map(|i| (i, vec![i + 1])).collect();
        let order = topological_order_or_cycle(&chain).expect("chain is acyclic");
        assert_eq!(order.len(), 10_001);
        assert_eq!(order.first(), Some(&0));
        assert_eq!(order.last(), Some(&10_000));
    }

    #[test]
    fn test_cycle_detected_display() {
        let g = graph(&[(0, &[1]), (1, &[0]), (2, &[])]);
        let err = topological_order_or_cycle(&g).expect_err("cyclic");
        let msg = err.to_string();
        assert!(msg.contains("2 of 3 nodes"), "message: {msg}");
        assert!(msg.contains("[0, 1]"), "message: {msg}");
    }

    #[test]
    fn test_cycle_detected_is_error() {
        let g = graph(&[(0, &[0])]);
        let Err(err) = topological_order_or_cycle(&g) else {
            panic!("self-loop must not order");
        };
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(!boxed.to_string().is_empty());
    }
}
