//! Output formatting shared by every subcommand.
//!
//! Results go to stdout: plain lines in human mode, one compact JSON object in
//! JSON mode. Status notices and timing go to stderr, colored when stderr is a
//! TTY and neither `--no-color` nor `NO_COLOR` is set.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use crate::error::CliError;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for stderr output, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit timing lines to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }
}

/// Tone of a stderr notice, which picks its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A positive outcome (green).
    Good,
    /// A negative but expected outcome (yellow).
    Warn,
    /// A failure (red).
    Bad,
}

// ---------------------------------------------------------------------------
// stderr
// ---------------------------------------------------------------------------

/// Writes a one-line notice to `writer`, suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_notice<W: Write>(
    writer: &mut W,
    tone: Tone,
    message: &str,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    if config.colors {
        let color = match tone {
            Tone::Good => ANSI_GREEN,
            Tone::Warn => ANSI_YELLOW,
            Tone::Bad => ANSI_RED,
        };
        writeln!(writer, "{color}{message}{ANSI_RESET}")
    } else {
        writeln!(writer, "{message}")
    }
}

/// Writes timing information to `writer` in verbose mode.
///
/// This is a no-op when `config.verbose` is `false`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// stdout
// ---------------------------------------------------------------------------

/// Writes `value` as a single compact JSON line.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_json<W: Write>(writer: &mut W, value: &serde_json::Value) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value).map_err(std::io::Error::other)?;
    writeln!(writer)
}

/// Renders a walk of nodes as `a -> b -> c`.
pub fn render_walk<S: AsRef<str>>(nodes: &[S]) -> String {
    nodes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" -> ")
}

/// Maps a failed write to `stream` (`"stdout"` or `"stderr"`) to a [`CliError`].
pub fn stream_error(stream: &str, e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}

/// Returns the singular or plural form of `word` depending on `count`.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn plain() -> FormatterConfig {
        FormatterConfig {
            colors: false,
            quiet: false,
            verbose: false,
        }
    }

    fn capture<F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn notice_plain() {
        let out = capture(|w| write_notice(w, Tone::Good, "acyclic", &plain()));
        assert_eq!(out, "acyclic\n");
    }

    #[test]
    fn notice_colored_wraps_message() {
        let config = FormatterConfig {
            colors: true,
            ..plain()
        };
        let out = capture(|w| write_notice(w, Tone::Bad, "cycle", &config));
        assert!(out.starts_with(ANSI_RED), "output: {out:?}");
        assert!(out.contains(ANSI_RESET), "output: {out:?}");
    }

    #[test]
    fn notice_suppressed_in_quiet_mode() {
        let config = FormatterConfig {
            quiet: true,
            ..plain()
        };
        let out = capture(|w| write_notice(w, Tone::Warn, "no cycle", &config));
        assert!(out.is_empty());
    }

    #[test]
    fn timing_only_when_verbose() {
        let quiet = capture(|w| write_timing(w, "parsed", Duration::from_millis(7), &plain()));
        assert!(quiet.is_empty());

        let config = FormatterConfig {
            verbose: true,
            ..plain()
        };
        let out = capture(|w| write_timing(w, "parsed", Duration::from_millis(7), &config));
        assert_eq!(out, "parsed in 7ms\n");
    }

    #[test]
    fn json_is_one_compact_line() {
        let value = serde_json::json!({"cycle": ["a", "b", "a"]});
        let out = capture(|w| write_json(w, &value));
        assert_eq!(out, "{\"cycle\":[\"a\",\"b\",\"a\"]}\n");
    }

    #[test]
    fn walk_rendering() {
        assert_eq!(render_walk(&["a", "b", "a"]), "a -> b -> a");
        assert_eq!(render_walk::<&str>(&[]), "");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "cycle", "cycles"), "cycle");
        assert_eq!(pluralize(0, "cycle", "cycles"), "cycles");
        assert_eq!(pluralize(3, "cycle", "cycles"), "cycles");
    }
}
