//! Implementation of `cyclegraph components <file>`.
//!
//! Splits the graph into weakly connected components and reports whether each
//! one is cyclic. A cycle never spans two components, so this pinpoints which
//! part of a large graph needs attention.
//!
//! In `--format json` mode a single object is emitted:
//! `{"components": [{"nodes": [...], "cyclic": bool}, ...], "count": N}`.
//!
//! Exit codes: 0 = success, 2 = input failure.
use std::io::Write;

use cyclegraph_core::{Graph, has_cycle_iterative};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{stream_error, write_json};

/// One weakly connected component with its cycle verdict.
pub struct ComponentReport {
    /// Member nodes in document order.
    pub nodes: Vec<String>,
    /// Whether the component contains a cycle.
    pub cyclic: bool,
}

/// Computes one [`ComponentReport`] per weakly connected component.
pub fn reports(graph: &Graph<String>) -> Vec<ComponentReport> {
    graph
        .weakly_connected_components()
        .into_iter()
        .map(|nodes| {
            let cyclic = has_cycle_iterative(&graph.induced_subgraph(&nodes));
            ComponentReport { nodes, cyclic }
        })
        .collect()
}

/// Runs the `components` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing the output fails.
pub fn run(graph: &Graph<String>, format: OutputFormat) -> Result<(), CliError> {
    let reports = reports(graph);
    tracing::debug!(
        components = reports.len(),
        cyclic = reports.iter().filter(|r| r.cyclic).count(),
        "components checked"
    );

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &reports),
        OutputFormat::Json => write_json(&mut out, &reports_json(&reports)),
    }
    .map_err(|e| stream_error("stdout", &e))
}

fn print_human<W: Write>(w: &mut W, reports: &[ComponentReport]) -> std::io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        let verdict = if report.cyclic { "cyclic" } else { "acyclic" };
        writeln!(
            w,
            "component {} ({} nodes, {verdict}): {}",
            i + 1,
            report.nodes.len(),
            report.nodes.join(", ")
        )?;
    }
    Ok(())
}

fn reports_json(reports: &[ComponentReport]) -> serde_json::Value {
    let components: Vec<serde_json::Value> = reports
        .iter()
        .map(|r| serde_json::json!({ "nodes": r.nodes, "cyclic": r.cyclic }))
        .collect();
    serde_json::json!({ "components": components, "count": reports.len() })
}
