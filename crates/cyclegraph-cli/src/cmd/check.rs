//! Implementation of `cyclegraph check <file>`.
//!
//! Runs one cycle detector, or all three with `--detector all`, and prints
//! `cycle` or `acyclic`. In `--format json` mode a single object is emitted:
//! `{"cyclic": bool, "detector": "<name>"}`, plus a `verdicts` map when more
//! than one detector ran.
//!
//! The recursive detector runs on a worker thread whose stack is sized from
//! the node count, so long chains cannot overflow the main thread.
//!
//! Exit codes: 0 = answered (cyclic or not), 2 = input failure, 3 = the
//! detectors disagreed or one could not run.
use std::io::Write;
use std::time::Instant;

use cyclegraph_core::{Detector, Graph};

use crate::OutputFormat;
use crate::cli::DetectorChoice;
use crate::error::CliError;
use crate::format::{FormatterConfig, stream_error, write_json, write_timing};

/// Stack reserved per nested call of the recursive detector.
const RECURSION_FRAME_BYTES: usize = 512;

/// Stack floor for the recursive detector's worker thread.
const MIN_DETECTOR_STACK_BYTES: usize = 8 * 1024 * 1024;

/// Runs the `check` command.
///
/// # Errors
///
/// Returns [`CliError::DetectorDisagreement`] if the detectors that ran did
/// not all return the same answer, or [`CliError::DetectorFailed`] if the
/// recursive detector's worker thread could not run.
pub fn run(
    graph: &Graph<String>,
    choice: DetectorChoice,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let mut err = std::io::stderr().lock();
    let mut verdicts: Vec<(Detector, bool)> = Vec::with_capacity(choice.detectors().len());
    for &detector in choice.detectors() {
        let start = Instant::now();
        let cyclic = run_detector(detector, graph)?;
        write_timing(&mut err, &format!("{detector} detector"), start.elapsed(), config)
            .map_err(|e| stream_error("stderr", &e))?;
        tracing::debug!(%detector, cyclic, "detector finished");
        verdicts.push((detector, cyclic));
    }

    let cyclic = verdicts.iter().any(|&(_, c)| c);
    if verdicts.iter().any(|&(_, c)| c != cyclic) {
        return Err(CliError::DetectorDisagreement { verdicts });
    }

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Human => writeln!(out, "{}", verdict_word(cyclic)),
        OutputFormat::Json => write_json(&mut out, &verdict_json(choice, cyclic, &verdicts)),
    }
    .map_err(|e| stream_error("stdout", &e))
}

/// Runs `detector` over `graph`.
///
/// The recursive detector nests one call per node on the current path, so it
/// runs on a scoped thread with a stack proportional to the node count.
fn run_detector(detector: Detector, graph: &Graph<String>) -> Result<bool, CliError> {
    match detector {
        Detector::Iterative | Detector::Kahn => Ok(detector.has_cycle(graph)),
        Detector::Recursive => {
            let stack_size = recursion_stack_size(graph.node_count());
            tracing::debug!(stack_size, "spawning recursive detector thread");
            std::thread::scope(|scope| {
                let handle = std::thread::Builder::new()
                    .name("recursive-detector".to_owned())
                    .stack_size(stack_size)
                    .spawn_scoped(scope, || detector.has_cycle(graph))
                    .map_err(|e| CliError::DetectorFailed {
                        detector,
                        detail: format!("cannot start a thread with a {stack_size}-byte stack: {e}"),
                    })?;
                handle.join().map_err(|_| CliError::DetectorFailed {
                    detector,
                    detail: "worker thread panicked".to_owned(),
                })
            })
        }
    }
}

fn recursion_stack_size(node_count: usize) -> usize {
    node_count
        .saturating_mul(RECURSION_FRAME_BYTES)
        .saturating_add(MIN_DETECTOR_STACK_BYTES)
}

fn verdict_word(cyclic: bool) -> &'static str {
    if cyclic { "cycle" } else { "acyclic" }
}

fn verdict_json(
    choice: DetectorChoice,
    cyclic: bool,
    verdicts: &[(Detector, bool)],
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    obj.insert("cyclic".to_owned(), serde_json::Value::Bool(cyclic));
    obj.insert(
        "detector".to_owned(),
        serde_json::Value::String(choice.name().to_owned()),
    );
    if verdicts.len() > 1 {
        let by_name: serde_json::Map<String, serde_json::Value> = verdicts
            .iter()
            .map(|(detector, c)| (detector.name().to_owned(), serde_json::Value::Bool(*c)))
            .collect();
        obj.insert("verdicts".to_owned(), serde_json::Value::Object(by_name));
    }
    serde_json::Value::Object(obj)
}
