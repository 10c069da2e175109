use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use journalfields::cli::Cli;

fn main() -> ExitCode {
    // stdout carries the rendered entries, diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let pipeline = cli.pipeline(stdout.is_terminal());

    match pipeline.run(io::stdin().lock(), stdout.lock()) {
        Ok(_summary) => ExitCode::SUCCESS,
        Err(err) => {
            // reported whatever RUST_LOG says
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
