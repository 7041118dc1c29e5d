//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cyclegraph_core::Detector;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints plain text to stdout. `Json` prints a single JSON object
/// per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// Detector choice for the `check` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DetectorChoice {
    /// Recursive three-color DFS.
    Recursive,
    /// Explicit-stack three-color DFS (default).
    Iterative,
    /// Kahn's in-degree reduction.
    Kahn,
    /// Run every detector and require them to agree.
    All,
}

impl DetectorChoice {
    /// The detectors this choice runs, in the order they run.
    pub fn detectors(self) -> &'static [Detector] {
        match self {
            Self::Recursive => &[Detector::Recursive],
            Self::Iterative => &[Detector::Iterative],
            Self::Kahn => &[Detector::Kahn],
            Self::All => &Detector::ALL,
        }
    }

    /// The flag value naming this choice.
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => Detector::Recursive.name(),
            Self::Iterative => Detector::Iterative.name(),
            Self::Kahn => Detector::Kahn.name(),
            Self::All => "all",
        }
    }
}

/// All top-level subcommands exposed by the `cyclegraph` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Report whether a graph contains a cycle.
    Check {
        /// Path to an adjacency JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Detector to run: recursive, iterative (default), kahn, or all.
        #[arg(long, default_value = "iterative")]
        detector: DetectorChoice,
    },

    /// Print one cycle as a closed walk.
    Find {
        /// Path to an adjacency JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print a topological order of every node.
    Order {
        /// Path to an adjacency JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// List every elementary cycle (diagnostic; cost grows exponentially).
    Cycles {
        /// Path to an adjacency JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Stop after this many cycles.
        ///
        /// Can also be set via the `CYCLEGRAPH_MAX_CYCLES` environment
        /// variable.
        #[arg(long, env = "CYCLEGRAPH_MAX_CYCLES", default_value = "1000")]
        max_cycles: usize,
    },

    /// List weakly connected components and whether each one is cyclic.
    Components {
        /// Path to an adjacency JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print summary statistics for a graph.
    Inspect {
        /// Path to an adjacency JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

impl Command {
    /// The input argument shared by every subcommand.
    pub fn file(&self) -> &PathOrStdin {
        match self {
            Self::Check { file, .. }
            | Self::Find { file }
            | Self::Order { file }
            | Self::Cycles { file, .. }
            | Self::Components { file }
            | Self::Inspect { file } => file,
        }
    }

    /// The subcommand name, for log and timing lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Check { .. } => "check",
            Self::Find { .. } => "find",
            Self::Order { .. } => "order",
            Self::Cycles { .. } => "cycles",
            Self::Components { .. } => "components",
            Self::Inspect { .. } => "inspect",
        }
    }
}

/// Root CLI struct for the `cyclegraph` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "cyclegraph",
    version,
    about = "Cycle detection and topological ordering for dependency graphs",
    long_about = "Reads a directed graph as a JSON adjacency map ({\"a\": [\"b\"], ...})\n\
                  and checks it for cycles, reports a cycle, orders it topologically,\n\
                  enumerates elementary cycles, or splits it into components."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and debug logs
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `CYCLEGRAPH_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "CYCLEGRAPH_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
