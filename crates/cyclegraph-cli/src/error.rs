//! CLI error type with exit-code mapping.
//!
//! Every command returns `Result<(), CliError>`. `main` prints
//! [`CliError::message`] to stderr and exits with [`CliError::exit_code`].
//!
//! Exit codes:
//! - `0`: success
//! - `1`: logical negative result (cycle where an order was requested, no
//!   cycle where one was requested)
//! - `2`: input failure (file not found, too large, bad UTF-8, bad JSON)
//! - `3`: the cycle detectors disagreed, or one could not run
use std::fmt;
use std::path::PathBuf;

use cyclegraph_core::{Detector, ParseError};

/// All errors the `cyclegraph` binary can report.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured [`--max-file-size`] limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid adjacency document.
    ParseFailed {
        /// A human-readable label for the source.
        source: String,
        /// The parser's error.
        error: ParseError,
    },

    // --- Exit code 1: logical negative results ---
    /// An order was requested but the graph is cyclic.
    ///
    /// The unorderable nodes have already been printed.
    Cyclic {
        /// Number of nodes that could not be ordered.
        remaining: usize,
        /// Total number of nodes in the graph.
        total: usize,
    },

    /// A cycle was requested but the graph is acyclic.
    NoCycle,

    // --- Exit code 3: internal inconsistency ---
    /// Two or more detectors returned different answers for the same graph.
    DetectorDisagreement {
        /// Each detector that ran, with its verdict.
        verdicts: Vec<(Detector, bool)>,
    },

    /// A detector could not run to completion, for example because its
    /// worker thread could not be started.
    DetectorFailed {
        /// The detector that failed.
        detector: Detector,
        /// What went wrong.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::Cyclic { .. } | Self::NoCycle => 1,

            Self::DetectorDisagreement { .. } | Self::DetectorFailed { .. } => 3,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { source, error } => {
                format!("error: {source}: {error}")
            }
            Self::Cyclic { remaining, total } => {
                format!("error: graph is cyclic: {remaining} of {total} nodes cannot be ordered")
            }
            Self::NoCycle => "error: no cycle found: graph is acyclic".to_owned(),
            Self::DetectorDisagreement { verdicts } => {
                let listed: Vec<String> = verdicts
                    .iter()
                    .map(|(detector, cyclic)| format!("{detector}={cyclic}"))
                    .collect();
                format!("error: detectors disagree: {}", listed.join(", "))
            }
            Self::DetectorFailed { detector, detail } => {
                format!("error: {detector} detector failed: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
