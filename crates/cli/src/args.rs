//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `config_context` module).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stylekit")]
#[command(about = "Validate and inspect styling pipeline configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  stylekit check styles.json\n  stylekit check styles.toml --env production\n  stylekit show styles.yaml --overlay local.yaml -o json\n  stylekit themes\n"
)]
pub struct Cli {
    /// Output format (text, json, yaml)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration and its overlays
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the effective configuration after all overlays
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List built-in theme names in canonical order
    Themes,
}

/// Where the configuration comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Base configuration file (.json, .toml, .yaml or .yml)
    #[arg(env = "STYLEKIT_CONFIG", value_name = "FILE")]
    pub config: PathBuf,

    /// Overlay file applied after the base; repeat to layer several, later wins
    #[arg(long = "overlay", value_name = "FILE")]
    pub overlays: Vec<PathBuf>,

    /// Environment name; applies `<stem>.<NAME>.<ext>` next to the base file if present
    #[arg(long, env = "STYLEKIT_ENV", value_name = "NAME")]
    pub env: Option<String>,
}
