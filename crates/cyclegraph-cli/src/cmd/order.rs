//! Implementation of `cyclegraph order <file>`.
//!
//! Prints a topological order, one node per line. In `--format json` mode a
//! single object is emitted: `{"order": [...]}`.
//!
//! When the graph is cyclic no order exists. Human mode lists the nodes that
//! could not be ordered on stderr; JSON mode emits
//! `{"order": null, "emitted": [...], "remaining": [...]}`.
//!
//! Exit codes: 0 = order printed, 1 = graph is cyclic, 2 = input failure.
use std::io::Write;

use cyclegraph_core::{Graph, topological_order_or_cycle};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatterConfig, Tone, stream_error, write_json, write_notice};

/// Runs the `order` command.
///
/// # Errors
///
/// Returns [`CliError::Cyclic`] if the graph has no topological order.
pub fn run(
    graph: &Graph<String>,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut out = std::io::stdout().lock();
    match topological_order_or_cycle(graph) {
        Ok(order) => match format {
            OutputFormat::Human => order.iter().try_for_each(|node| writeln!(out, "{node}")),
            OutputFormat::Json => write_json(&mut out, &serde_json::json!({ "order": order })),
        }
        .map_err(|e| stream_error("stdout", &e)),
        Err(cycle) => {
            match format {
                OutputFormat::Human => {
                    let message = format!("cannot be ordered: {}", cycle.remaining.join(", "));
                    write_notice(&mut std::io::stderr().lock(), Tone::Bad, &message, config)
                        .map_err(|e| stream_error("stderr", &e))?;
                }
                OutputFormat::Json => {
                    let value = serde_json::json!({
                        "order": null,
                        "emitted": cycle.emitted,
                        "remaining": cycle.remaining,
                    });
                    write_json(&mut out, &value).map_err(|e| stream_error("stdout", &e))?;
                }
            }
            Err(CliError::Cyclic {
                remaining: cycle.remaining.len(),
                total: cycle.node_count(),
            })
        }
    }
}
