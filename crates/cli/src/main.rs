//! stylekit - Command-line interface for styling pipeline configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Validate configuration files and their overlays via the config library.
//! - Format and display results in text, JSON, or YAML.
//!
//! Does NOT handle:
//! - Validation rules or merge semantics (see `crates/config`).
//! - Generating stylesheets from the configuration.
//!
//! Invariants:
//! - Logs go to stderr; command output goes to stdout or `--output-file`.
//! - The process exit code always comes from `error::ExitCode`.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt, render_error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
