//! Implementation of `cyclegraph inspect <file>`.
//!
//! Parses an adjacency document and prints summary statistics to stdout:
//! - node count (including successor-only nodes)
//! - edge count (duplicates counted)
//! - self-loop count
//! - source count (no incoming edges) and sink count (no outgoing edges)
//! - weakly connected component count
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed.
//!
//! Exit codes: 0 = success, 2 = input failure.
use std::collections::HashSet;
use std::io::Write;

use cyclegraph_core::Graph;

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{stream_error, write_json};

/// Statistics gathered from a parsed [`Graph`].
#[derive(Debug, PartialEq, Eq)]
pub struct InspectStats {
    /// Total number of nodes in the universe.
    pub node_count: usize,
    /// Total number of edges, duplicates included.
    pub edge_count: usize,
    /// Number of edges from a node to itself.
    pub self_loops: usize,
    /// Nodes with no incoming edge.
    pub sources: usize,
    /// Nodes with no outgoing edge.
    pub sinks: usize,
    /// Number of weakly connected components.
    pub components: usize,
}

impl InspectStats {
    /// Computes statistics from a parsed [`Graph`].
    pub fn from_graph(graph: &Graph<String>) -> Self {
        let mut with_incoming: HashSet<&String> = HashSet::new();
        let mut with_outgoing: HashSet<&String> = HashSet::new();
        let mut self_loops = 0;
        for (from, to) in graph.edges() {
            with_outgoing.insert(from);
            with_incoming.insert(to);
            if from == to {
                self_loops += 1;
            }
        }

        let node_count = graph.node_count();
        Self {
            node_count,
            edge_count: graph.edge_count(),
            self_loops,
            sources: node_count - with_incoming.len(),
            sinks: node_count - with_outgoing.len(),
            components: graph.weakly_connected_components().len(),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing the output fails.
pub fn run(graph: &Graph<String>, format: OutputFormat) -> Result<(), CliError> {
    let stats = InspectStats::from_graph(graph);

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => write_json(&mut out, &stats_json(&stats)),
    }
    .map_err(|e| stream_error("stdout", &e))
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "nodes:       {}", stats.node_count)?;
    writeln!(w, "edges:       {}", stats.edge_count)?;
    writeln!(w, "self_loops:  {}", stats.self_loops)?;
    writeln!(w, "sources:     {}", stats.sources)?;
    writeln!(w, "sinks:       {}", stats.sinks)?;
    writeln!(w, "components:  {}", stats.components)
}

fn stats_json(stats: &InspectStats) -> serde_json::Value {
    serde_json::json!({
        "node_count": stats.node_count,
        "edge_count": stats.edge_count,
        "self_loops": stats.self_loops,
        "sources": stats.sources,
        "sinks": stats.sinks,
        "components": stats.components,
    })
}
