//! Root configuration type for the styling pipeline.

use serde::Serialize;
use std::collections::BTreeMap;

use super::plugin::PluginOptions;

/// Token name to value within one extension category.
pub type TokenMap = BTreeMap<String, String>;

/// Extension category (e.g. `colors`) to its tokens.
pub type ThemeExtensions = BTreeMap<String, TokenMap>;

/// Validated styling-pipeline configuration.
///
/// Produced by [`crate::load`] or [`crate::merge`] and handed to the external
/// CSS generator. Nothing in this crate mutates a `StylingConfig` after it is
/// returned; share it behind an `Arc` for concurrent readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingConfig {
    /// Glob patterns of source files to scan for class usage, in input order.
    pub content_globs: Vec<String>,
    pub theme_extensions: ThemeExtensions,
    /// Plugin identifiers in activation order.
    pub plugins: Vec<String>,
    pub plugin_options: PluginOptions,
}

impl StylingConfig {
    /// Look up a token in an extension category.
    pub fn token(&self, category: &str, name: &str) -> Option<&str> {
        self.theme_extensions
            .get(category)
            .and_then(|tokens| tokens.get(name))
            .map(String::as_str)
    }

    /// Returns true if the plugin identifier is activated.
    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin == id)
    }
}
