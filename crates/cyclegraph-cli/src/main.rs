mod cli;
mod cmd;
mod error;
mod format;
mod io;

use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat, PathOrStdin};
use crate::error::CliError;
use crate::format::{FormatterConfig, stream_error, write_timing};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);

    let code = match run(&cli, &config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e.message());
            e.exit_code()
        }
    };
    std::process::exit(code);
}

/// Installs a stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug`, `--quiet`
/// selects `error`, and the default is `warn`.
fn init_tracing(quiet: bool, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, config: &FormatterConfig) -> Result<(), CliError> {
    let start = Instant::now();
    tracing::debug!(command = cli.command.name(), "starting");
    let graph = cmd::load_graph(cli.command.file(), cli.max_file_size, config)?;

    let result = match &cli.command {
        Command::Check { detector, .. } => cmd::check::run(&graph, *detector, cli.format, config),
        Command::Find { .. } => cmd::find::run(&graph, cli.format),
        Command::Order { .. } => cmd::order::run(&graph, cli.format, config),
        Command::Cycles { max_cycles, .. } => {
            cmd::cycles::run(&graph, *max_cycles, cli.format, config)
        }
        Command::Components { .. } => cmd::components::run(&graph, cli.format),
        Command::Inspect { .. } => cmd::inspect::run(&graph, cli.format),
    };

    result.and_then(|()| {
        let label = format!("{} finished", cli.command.name());
        write_timing(&mut std::io::stderr().lock(), &label, start.elapsed(), config)
            .map_err(|e| stream_error("stderr", &e))
    })
}
