//! Component-theme plugin options.
//!
//! Responsibilities:
//! - Define `PluginOptions`, the typed options of the component-theme plugin.
//! - Provide defaults for every option.
//!
//! Does NOT handle:
//! - Parsing options from raw input (see `loader::overlay`).
//! - Cross-field checks such as `dark_theme` resolution (see `loader::validate`).
//!
//! Invariants:
//! - All style flags default to `true` except `right_to_left_enabled`.
//! - `theme_list` order is theme precedence and is never reordered.

use serde::Serialize;

use super::theme::ThemeSelection;
use crate::constants::{DEFAULT_DARK_THEME, DEFAULT_PREFIX, DEFAULT_THEME_LIST, DEFAULT_THEME_ROOT};

/// Options of the component-theme plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Enabled themes in precedence order. The first entry is the default theme.
    pub theme_list: Vec<ThemeSelection>,
    /// Emit base styles.
    pub base_styles_enabled: bool,
    /// Emit component styles (colors, sizing) rather than unstyled components.
    pub component_styles_enabled: bool,
    /// Emit responsive and modifier utility classes.
    pub utility_classes_enabled: bool,
    /// Print plugin info to the console during the build.
    pub logging_enabled: bool,
    /// Generate right-to-left variants.
    pub right_to_left_enabled: bool,
    /// Theme used for `prefers-color-scheme: dark`.
    pub dark_theme: String,
    /// Prefix prepended to component class names.
    pub prefix: String,
    /// Selector that receives the theme CSS variables.
    pub theme_root: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            theme_list: DEFAULT_THEME_LIST
                .iter()
                .map(|name| ThemeSelection::BuiltIn((*name).to_string()))
                .collect(),
            base_styles_enabled: true,
            component_styles_enabled: true,
            utility_classes_enabled: true,
            logging_enabled: true,
            right_to_left_enabled: false,
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            theme_root: DEFAULT_THEME_ROOT.to_string(),
        }
    }
}

impl PluginOptions {
    /// Theme names in precedence order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.theme_list.iter().map(ThemeSelection::name)
    }

    /// Find a theme in the list by exact name.
    pub fn find_theme(&self, name: &str) -> Option<&ThemeSelection> {
        self.theme_list.iter().find(|theme| theme.name() == name)
    }
}
