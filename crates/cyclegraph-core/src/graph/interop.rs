//! Conversion to and from `petgraph` directed graphs.
//!
//! Producers that already hold a `petgraph` [`DiGraph`] can hand it to the
//! engine without rebuilding an adjacency map by hand, and callers can move a
//! [`Graph`] into `petgraph` to use its wider algorithm library.
use std::hash::Hash;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::Graph;

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Builds a graph whose node identifiers are the node weights of `digraph`.
    ///
    /// Nodes enter the universe in `petgraph` index order; each node's
    /// outgoing edges keep their insertion order. Edge weights are dropped.
    /// Two `petgraph` nodes with equal weights become a single node.
    pub fn from_digraph<E>(digraph: &DiGraph<N, E>) -> Self {
        let mut graph = Graph::new();
        for index in digraph.node_indices() {
            graph.add_node(digraph[index].clone());
        }
        for index in digraph.node_indices() {
            // petgraph yields outgoing edges most-recent first.
            let mut targets: Vec<NodeIndex> = digraph.edges(index).map(|e| e.target()).collect();
            targets.reverse();
            for target in targets {
                graph.add_edge(digraph[index].clone(), digraph[target].clone());
            }
        }
        graph
    }

    /// Copies this graph into a `petgraph` [`DiGraph`] with unit edge weights.
    ///
    /// Universe order becomes `petgraph` index order.
    pub fn to_digraph(&self) -> DiGraph<N, ()> {
        let mut digraph = DiGraph::with_capacity(self.node_count(), self.edge_count());
        for node in self.nodes() {
            digraph.add_node(node.clone());
        }
        for position in 0..self.node_count() {
            for &successor in self.successor_positions(position) {
                digraph.add_edge(NodeIndex::new(position), NodeIndex::new(successor), ());
            }
        }
        digraph
    }
}
