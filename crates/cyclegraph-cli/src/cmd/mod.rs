//! Command module for the `cyclegraph` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the parsed graph and arguments and returns `Ok(())` on
//! success or a [`crate::error::CliError`] on failure.
use std::time::Instant;

use cyclegraph_core::{Graph, parse_adjacency};

use crate::PathOrStdin;
use crate::error::CliError;
use crate::format::{FormatterConfig, stream_error, write_timing};
use crate::io::{read_input, source_label};

pub mod check;
pub mod components;
pub mod cycles;
pub mod find;
pub mod inspect;
pub mod order;

/// Reads and parses the adjacency document named by `source`.
///
/// In verbose mode the read and parse durations are written to stderr.
///
/// # Errors
///
/// Returns any input failure from [`read_input`], or
/// [`CliError::ParseFailed`] if the content is not an adjacency document.
pub fn load_graph(
    source: &PathOrStdin,
    max_size: u64,
    config: &FormatterConfig,
) -> Result<Graph<String>, CliError> {
    let start = Instant::now();
    let content = read_input(source, max_size)?;
    let read_elapsed = start.elapsed();

    let start = Instant::now();
    let graph = parse_adjacency(&content).map_err(|error| CliError::ParseFailed {
        source: source_label(source),
        error,
    })?;
    let parse_elapsed = start.elapsed();

    let mut err = std::io::stderr().lock();
    write_timing(&mut err, "read", read_elapsed, config)
        .and_then(|()| write_timing(&mut err, "parsed", parse_elapsed, config))
        .map_err(|e| stream_error("stderr", &e))?;

    Ok(graph)
}
