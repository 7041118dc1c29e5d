//! Graph generators and benchmark utilities for `cyclegraph-core`.
//!
//! This crate provides deterministic generation of dependency-shaped graphs
//! for benchmarking and property-based testing, plus checkers that verify
//! the invariants every detector and ordering routine must uphold.

pub mod correctness;
pub mod generator;

use cyclegraph_core::Graph;

pub use generator::{GeneratorConfig, SizeTier, Topology, generate_graph};

/// Renders a generated graph as an adjacency JSON document.
///
/// Labels become JSON strings, so the output parses back through
/// [`cyclegraph_core::parse_adjacency`] into an equal-shaped graph.
///
/// # Errors
///
/// Returns the serializer error if rendering fails.
pub fn to_adjacency_json(graph: &Graph<u32>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&graph.map_nodes(u32::to_string))
}
