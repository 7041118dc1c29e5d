//! Implementation of `cyclegraph cycles <file>`.
//!
//! Lists every elementary cycle, one closed walk per line, rooted at the node
//! that comes first in the document. Enumeration stops after `--max-cycles`
//! cycles; a truncated listing is flagged on stderr (human) or by
//! `"truncated": true` (JSON).
//!
//! JSON shape: `{"cycles": [[...], ...], "count": N, "truncated": bool}`,
//! each cycle in open form (the closing edge back to its first node implied).
//!
//! Exit codes: 0 = success (including no cycles), 2 = input failure.
use std::io::Write;
use std::time::Instant;

use cyclegraph_core::{CycleEnumeration, Graph, enumerate_cycles_capped};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{
    FormatterConfig, Tone, pluralize, render_walk, stream_error, write_json, write_notice,
    write_timing,
};

/// Runs the `cycles` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] only if writing the output fails.
pub fn run(
    graph: &Graph<String>,
    max_cycles: usize,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let start = Instant::now();
    let enumeration = enumerate_cycles_capped(graph, max_cycles);
    let mut err = std::io::stderr().lock();
    write_timing(&mut err, "enumerated", start.elapsed(), config)
        .map_err(|e| stream_error("stderr", &e))?;
    if enumeration.truncated {
        tracing::warn!(max_cycles, "cycle enumeration stopped at the cap");
    }

    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Human => {
            print_human(&mut out, &enumeration).map_err(|e| stream_error("stdout", &e))?;
            let message = summary(&enumeration, max_cycles);
            write_notice(&mut err, summary_tone(&enumeration), &message, config)
                .map_err(|e| stream_error("stderr", &e))
        }
        OutputFormat::Json => write_json(
            &mut out,
            &serde_json::json!({
                "cycles": enumeration.cycles,
                "count": enumeration.cycles.len(),
                "truncated": enumeration.truncated,
            }),
        )
        .map_err(|e| stream_error("stdout", &e)),
    }
}

fn print_human<W: Write>(w: &mut W, enumeration: &CycleEnumeration<String>) -> std::io::Result<()> {
    for cycle in &enumeration.cycles {
        let closed: Vec<&str> = cycle
            .iter()
            .chain(cycle.first())
            .map(String::as_str)
            .collect();
        writeln!(w, "{}", render_walk(&closed))?;
    }
    Ok(())
}

fn summary(enumeration: &CycleEnumeration<String>, max_cycles: usize) -> String {
    let count = enumeration.cycles.len();
    let noun = pluralize(count, "cycle", "cycles");
    if enumeration.truncated {
        format!("{count} {noun} (truncated at --max-cycles {max_cycles})")
    } else {
        format!("{count} {noun}")
    }
}

fn summary_tone(enumeration: &CycleEnumeration<String>) -> Tone {
    if enumeration.truncated {
        Tone::Warn
    } else {
        Tone::Good
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn enumeration(cycles: &[&[&str]], truncated: bool) -> CycleEnumeration<String> {
        CycleEnumeration {
            cycles: cycles
                .iter()
                .map(|c| c.iter().map(|&n| n.to_owned()).collect())
                .collect(),
            truncated,
        }
    }

    #[test]
    fn human_lines_are_closed_walks() {
        let e = enumeration(&[&["0", "1", "3"], &["2", "4", "5"]], false);
        let mut buf = Vec::new();
        print_human(&mut buf, &e).expect("write");
        let text = String::from_utf8(buf).expect("utf-8");
        assert_eq!(text, "0 -> 1 -> 3 -> 0\n2 -> 4 -> 5 -> 2\n");
    }

    #[test]
    fn summary_mentions_truncation() {
        let e = enumeration(&[&["a", "b"]], true);
        assert_eq!(summary(&e, 1), "1 cycle (truncated at --max-cycles 1)");
        assert_eq!(summary_tone(&e), Tone::Warn);
    }

    #[test]
    fn summary_without_truncation() {
        let e = enumeration(&[], false);
        assert_eq!(summary(&e, 1000), "0 cycles");
        assert_eq!(summary_tone(&e), Tone::Good);
    }
}
