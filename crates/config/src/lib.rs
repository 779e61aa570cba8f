//! Configuration management for stylekit.
//!
//! This crate validates and normalizes the declarative configuration of a
//! utility-class styling pipeline and its component-theme plugin: the content
//! globs to scan, theme token extensions, active plugins, and theme selection.
//! The validated [`StylingConfig`] is consumed by an external CSS generator.

pub mod constants;
mod loader;
pub mod types;

pub use constants::{BUILTIN_THEMES, is_builtin_theme};
pub use loader::{
    ConfigError, ConfigLoader, ConfigOverlay, ErrorKind, SourceFormat, environment_overlay_path,
    load, merge, read_source,
};
pub use types::{
    CustomTheme, PluginOptions, StylingConfig, ThemeExtensions, ThemeSelection, TokenMap,
};
