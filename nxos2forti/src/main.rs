use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod convert;
mod inspect;
mod path_guard;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert::run_convert(args),
        Command::Inspect(args) => inspect::run_inspect(args),
    }
}

fn init_logging(verbose: bool) {
    let env = std::env::var("RUST_LOG").ok();
    fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Base level from `--verbose`, with valid `RUST_LOG` directives layered on top.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let base = if verbose { "debug" } else { "info" };
    env.into_iter()
        .flat_map(|spec| spec.split(','))
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .filter_map(|directive| directive.parse().ok())
        .fold(EnvFilter::new(base), EnvFilter::add_directive)
}
