//! Serde support for [`Graph`]: a map from node to its successor list.
//!
//! Serialization writes every node in the universe, so successor-only nodes
//! appear explicitly with an empty list. Deserialization reads entries in
//! document order, which therefore becomes the universe order.
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Graph;

impl<N: Serialize> Serialize for Graph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.node_count()))?;
        for (position, node) in self.nodes().iter().enumerate() {
            let successors: Vec<&N> = self
                .successor_positions(position)
                .iter()
                .map(|&target| self.node_at(target))
                .collect();
            map.serialize_entry(node, &successors)?;
        }
        map.end()
    }
}

impl<'de, N> Deserialize<'de> for Graph<N>
where
    N: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AdjacencyVisitor(PhantomData))
    }
}

struct AdjacencyVisitor<N>(PhantomData<N>);

impl<'de, N> Visitor<'de> for AdjacencyVisitor<N>
where
    N: Deserialize<'de> + Eq + Hash + Clone,
{
    type Value = Graph<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from each node to a list of its successor nodes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Graph<N>, A::Error> {
        let mut graph = Graph::new();
        while let Some((node, successors)) = access.next_entry::<N, Vec<N>>()? {
            graph.extend_node(node, successors);
        }
        Ok(graph)
    }
}
