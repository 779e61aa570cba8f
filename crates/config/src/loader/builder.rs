//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Collect a base source and any number of overlays from values or files.
//! - Build the final `StylingConfig` by loading the base and merging overlays in order.
//!
//! Does NOT handle:
//! - Field validation (delegated to `load` / `merge`).
//! - File format detection (delegated to `source.rs`).
//!
//! Invariants / Assumptions:
//! - Overlays are applied in the order they were added; later overlays win.
//! - File reads and overlay validation happen when a source is added, so an
//!   unreadable or invalid overlay is reported by the call that added it.
//! - `build()` never returns a partially merged configuration.

use serde_json::Value;
use std::path::Path;

use super::error::ConfigError;
use super::load::{load, merge};
use super::overlay::ConfigOverlay;
use super::source::read_source;
use crate::types::StylingConfig;

/// Configuration loader that layers overlays onto a base source.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    source: Option<Value>,
    overlays: Vec<ConfigOverlay>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base configuration from an already-parsed value.
    pub fn with_source(mut self, raw: Value) -> Self {
        self.source = Some(raw);
        self
    }

    /// Set the base configuration from a JSON, TOML or YAML file.
    pub fn with_source_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = read_source(path)?;
        Ok(self.with_source(raw))
    }

    /// Add an overlay from an already-parsed value.
    ///
    /// # Errors
    ///
    /// Returns the first per-field validation error in `raw`.
    pub fn with_overlay(mut self, raw: Value) -> Result<Self, ConfigError> {
        self.overlays.push(ConfigOverlay::from_value(&raw)?);
        Ok(self)
    }

    /// Add an overlay from a JSON, TOML or YAML file.
    pub fn with_overlay_file(self, path: &Path) -> Result<Self, ConfigError> {
        let raw = read_source(path)?;
        self.with_overlay(raw)
    }

    /// Number of overlays added so far.
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingSource` if no base was set, otherwise the first error
    /// from loading the base or merging.
    pub fn build(self) -> Result<StylingConfig, ConfigError> {
        let source = self.source.ok_or(ConfigError::MissingSource)?;
        let mut config = load(&source)?;

        for (position, overlay) in self.overlays.iter().enumerate() {
            if overlay.is_empty() {
                tracing::debug!(position, "Skipping empty configuration overlay");
                continue;
            }
            config = merge(&config, overlay)?;
        }

        Ok(config)
    }
}
