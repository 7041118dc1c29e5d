//! Weakly connected components.
//!
//! Splitting a graph into components lets callers scope cycle queries: a
//! cycle never spans two weakly connected components, so each component can be
//! checked, ordered or reported on its own.
use std::collections::HashMap;
use std::hash::Hash;

use super::Graph;
use crate::union_find::UnionFind;

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Partitions the universe into weakly connected components.
    ///
    /// Edge direction is ignored. Each component lists its nodes in universe
    /// order, and components are ordered by their first node.
    pub fn weakly_connected_components(&self) -> Vec<Vec<N>> {
        let node_count = self.node_count();
        let mut sets = UnionFind::new(node_count);
        for position in 0..node_count {
            for &successor in self.successor_positions(position) {
                sets.union(position, successor);
            }
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<N>> = Vec::new();
        for position in 0..node_count {
            let root = sets.find(position);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(self.node_at(position).clone());
        }

        tracing::debug!(
            nodes = node_count,
            components = components.len(),
            "weakly connected components computed"
        );
        components
    }

    /// Returns one subgraph per weakly connected component, in component order.
    pub fn component_subgraphs(&self) -> Vec<Graph<N>> {
        self.weakly_connected_components()
            .iter()
            .map(|component| self.induced_subgraph(component))
            .collect()
    }
}
