//! Implementation of `cyclegraph find <file>`.
//!
//! Prints one cycle as a closed walk, `a -> b -> a`. In `--format json` mode
//! a single object is emitted: `{"cycle": [...]}`, or `{"cycle": null}` when
//! the graph is acyclic.
//!
//! Exit codes: 0 = cycle printed, 1 = graph is acyclic, 2 = input failure.
use std::io::Write;

use cyclegraph_core::{Graph, find_cycle};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{render_walk, stream_error, write_json};

/// Runs the `find` command.
///
/// # Errors
///
/// Returns [`CliError::NoCycle`] if the graph is acyclic.
pub fn run(graph: &Graph<String>, format: OutputFormat) -> Result<(), CliError> {
    let cycle = find_cycle(graph);
    tracing::debug!(found = cycle.is_some(), "cycle search finished");

    let mut out = std::io::stdout().lock();
    match (&cycle, format) {
        (Some(walk), OutputFormat::Human) => writeln!(out, "{}", render_walk(walk)),
        (None, OutputFormat::Human) => Ok(()),
        (_, OutputFormat::Json) => write_json(&mut out, &serde_json::json!({ "cycle": cycle })),
    }
    .map_err(|e| stream_error("stdout", &e))?;

    match cycle {
        Some(_) => Ok(()),
        None => Err(CliError::NoCycle),
    }
}
