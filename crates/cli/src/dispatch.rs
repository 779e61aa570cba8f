//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Load configuration for the commands that need one.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - `themes` never reads a configuration file.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::ConfigContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let output_file = cli.output_file.as_deref();

    match cli.command {
        Commands::Check { source } => {
            let context = ConfigContext::load(&source)?;
            commands::check::run(context, &cli.output, output_file)?;
        }
        Commands::Show { source } => {
            let context = ConfigContext::load(&source)?;
            commands::show::run(context, &cli.output, output_file)?;
        }
        Commands::Themes => {
            commands::themes::run(&cli.output, output_file)?;
        }
    }

    Ok(())
}
