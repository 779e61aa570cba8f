//! Configuration type definitions for stylekit.
//!
//! Responsibilities:
//! - Define the validated `StylingConfig` and its plugin/theme sub-entities.
//! - Provide defaults for plugin options.
//! - Serialize configurations in the same shape the loader accepts.
//!
//! Does NOT handle:
//! - Parsing or validating raw input (see `loader` module).
//! - Reading configuration files (see `loader::source`).
//!
//! Invariants:
//! - Types here are plain data; every instance returned by the loader has passed validation.
//! - Map-typed fields use `BTreeMap` so serialization and equality are deterministic.

mod plugin;
mod styling;
mod theme;

pub use plugin::PluginOptions;
pub use styling::{StylingConfig, ThemeExtensions, TokenMap};
pub use theme::{CustomTheme, ThemeSelection, is_hex_color};
