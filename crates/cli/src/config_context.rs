//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Resolve the ordered list of sources (base, explicit overlays, environment overlay).
//! - Build the validated configuration once and share it read-only.
//! - Attribute every error to the file that caused it.
//!
//! Does NOT handle:
//! - Validation rules (see `stylekit_config`).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Overlays apply in the order given on the command line; the environment
//!   overlay, if its file exists, applies last.
//! - The configuration is never mutated after `load` returns.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use stylekit_config::{ConfigLoader, StylingConfig, environment_overlay_path};

use crate::args::SourceArgs;

/// A loaded configuration together with the files it came from.
pub(crate) struct ConfigContext {
    pub(crate) config: Arc<StylingConfig>,
    pub(crate) base: PathBuf,
    pub(crate) overlays: Vec<PathBuf>,
}

impl ConfigContext {
    /// Load the base file and every applicable overlay.
    pub(crate) fn load(args: &SourceArgs) -> Result<Self> {
        let overlays = resolve_overlays(args);

        let mut loader = ConfigLoader::new()
            .with_source_file(&args.config)
            .with_context(|| format!("Failed to read configuration {}", args.config.display()))?;
        for path in &overlays {
            loader = loader
                .with_overlay_file(path)
                .with_context(|| format!("Invalid overlay {}", path.display()))?;
        }

        let config = loader.build().with_context(|| {
            if overlays.is_empty() {
                format!("Invalid configuration {}", args.config.display())
            } else {
                let applied: Vec<String> =
                    overlays.iter().map(|path| path.display().to_string()).collect();
                format!(
                    "Invalid configuration {} after overlays {}",
                    args.config.display(),
                    applied.join(", ")
                )
            }
        })?;

        tracing::info!(
            base = %args.config.display(),
            overlays = overlays.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: Arc::new(config),
            base: args.config.clone(),
            overlays,
        })
    }
}

/// Explicit overlays followed by the environment overlay when its file exists.
fn resolve_overlays(args: &SourceArgs) -> Vec<PathBuf> {
    let mut overlays = args.overlays.clone();

    let Some(env) = args.env.as_deref() else {
        return overlays;
    };
    match environment_overlay_path(&args.config, env) {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), env, "Using environment overlay");
            overlays.push(path);
        }
        Some(path) => {
            tracing::debug!(path = %path.display(), env, "No environment overlay found");
        }
        None => {
            tracing::debug!(env, "Blank environment name ignored");
        }
    }
    overlays
}
