//! Partial configuration layers.
//!
//! Responsibilities:
//! - Parse a raw value into a `ConfigOverlay` where every field is optional.
//! - Compose overlays left-to-right (`ConfigOverlay::then`).
//! - Apply plugin option layers onto resolved `PluginOptions`.
//!
//! Does NOT handle:
//! - Requiring fields (see `load.rs`).
//! - Cross-field validation of the merged result (see `validate::resolved`).
//!
//! Invariants:
//! - Every field present in an overlay has already passed per-field validation.
//! - `content_globs`, `plugins`, and `theme_list` replace wholesale when present;
//!   theme extensions merge token-by-token; other plugin options replace per option.

use serde_json::{Map, Value};

use super::error::ConfigError;
use super::fields::{expect_bool, expect_object, expect_str, lookup, trace_unknown_keys};
use super::validate;
use crate::types::{PluginOptions, ThemeExtensions, ThemeSelection};

pub(crate) const CONTENT_KEYS: &[&str] = &["content", "contentGlobs"];
const EXTENSION_KEYS: &[&str] = &["themeExtensions"];
const PLUGIN_KEYS: &[&str] = &["plugins"];
const PLUGIN_OPTION_KEYS: &[&str] = &["pluginOptions", "daisyui"];

const THEME_LIST_KEYS: &[&str] = &["themeList", "themes"];
const BASE_KEYS: &[&str] = &["baseStylesEnabled", "base"];
const STYLED_KEYS: &[&str] = &["componentStylesEnabled", "styled"];
const UTILS_KEYS: &[&str] = &["utilityClassesEnabled", "utils"];
const LOGS_KEYS: &[&str] = &["loggingEnabled", "logs"];
const RTL_KEYS: &[&str] = &["rightToLeftEnabled", "rtl"];
const DARK_THEME_KEYS: &[&str] = &["darkTheme"];
const PREFIX_KEYS: &[&str] = &["prefix"];
const THEME_ROOT_KEYS: &[&str] = &["themeRoot"];

/// A partial configuration layered onto a base with [`crate::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverlay {
    pub(crate) content_globs: Option<Vec<String>>,
    pub(crate) theme_extensions: ThemeExtensions,
    pub(crate) plugins: Option<Vec<String>>,
    pub(crate) plugin_options: PluginOptionsOverlay,
}

/// Optional plugin options; `None` keeps the value underneath.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PluginOptionsOverlay {
    pub(crate) theme_list: Option<Vec<ThemeSelection>>,
    pub(crate) base_styles_enabled: Option<bool>,
    pub(crate) component_styles_enabled: Option<bool>,
    pub(crate) utility_classes_enabled: Option<bool>,
    pub(crate) logging_enabled: Option<bool>,
    pub(crate) right_to_left_enabled: Option<bool>,
    pub(crate) dark_theme: Option<String>,
    /// Field path `dark_theme` was read from, for diagnostics.
    pub(crate) dark_theme_path: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) theme_root: Option<String>,
}

impl ConfigOverlay {
    /// Parse and validate an overlay from a raw structured value.
    ///
    /// Accepts the same keys as [`crate::load`]; nothing is required.
    pub fn from_value(raw: &Value) -> Result<Self, ConfigError> {
        let root = expect_object(raw, "")?;
        Self::from_map(root)
    }

    pub(crate) fn from_map(root: &Map<String, Value>) -> Result<Self, ConfigError> {
        trace_unknown_keys(
            root,
            "",
            &[
                "content",
                "contentGlobs",
                "themeExtensions",
                "theme",
                "plugins",
                "pluginOptions",
                "daisyui",
            ],
        );

        let content_globs = lookup(root, "", CONTENT_KEYS)
            .map(|(path, value)| validate::content_globs(value, &path))
            .transpose()?;

        let theme_extensions = match extensions_value(root)? {
            Some((path, value)) => validate::theme_extensions(value, &path)?,
            None => ThemeExtensions::new(),
        };

        let plugins = lookup(root, "", PLUGIN_KEYS)
            .map(|(path, value)| validate::plugins(value, &path))
            .transpose()?;

        let plugin_options = match lookup(root, "", PLUGIN_OPTION_KEYS) {
            Some((path, value)) => PluginOptionsOverlay::parse(expect_object(value, &path)?, &path)?,
            None => PluginOptionsOverlay::default(),
        };

        Ok(Self {
            content_globs,
            theme_extensions,
            plugins,
            plugin_options,
        })
    }

    /// Compose two overlays: `later` is applied after `self`.
    ///
    /// For any base `b`, `merge(&merge(&b, &o1)?, &o2)` equals
    /// `merge(&b, &o1.then(o2))` whenever both succeed.
    pub fn then(mut self, later: ConfigOverlay) -> ConfigOverlay {
        if later.content_globs.is_some() {
            self.content_globs = later.content_globs;
        }
        extend_tokens(&mut self.theme_extensions, later.theme_extensions);
        if later.plugins.is_some() {
            self.plugins = later.plugins;
        }
        self.plugin_options = self.plugin_options.then(later.plugin_options);
        self
    }

    /// Returns true if applying this overlay cannot change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Content globs this overlay sets, if any.
    pub fn content_globs(&self) -> Option<&[String]> {
        self.content_globs.as_deref()
    }
}

/// Locate theme extensions under `themeExtensions` or `theme.extend`.
fn extensions_value(root: &Map<String, Value>) -> Result<Option<(String, &Value)>, ConfigError> {
    if let Some(found) = lookup(root, "", EXTENSION_KEYS) {
        return Ok(Some(found));
    }
    let Some((theme_path, theme)) = lookup(root, "", &["theme"]) else {
        return Ok(None);
    };
    let theme = expect_object(theme, &theme_path)?;
    trace_unknown_keys(theme, &theme_path, &["extend"]);
    Ok(lookup(theme, &theme_path, &["extend"]))
}

/// Deep-merge one level: category by category, token by token, `later` wins.
pub(crate) fn extend_tokens(target: &mut ThemeExtensions, later: ThemeExtensions) {
    for (category, tokens) in later {
        target.entry(category).or_default().extend(tokens);
    }
}

impl PluginOptionsOverlay {
    fn parse(map: &Map<String, Value>, parent: &str) -> Result<Self, ConfigError> {
        trace_unknown_keys(
            map,
            parent,
            &[
                "themeList",
                "themes",
                "baseStylesEnabled",
                "base",
                "componentStylesEnabled",
                "styled",
                "utilityClassesEnabled",
                "utils",
                "loggingEnabled",
                "logs",
                "rightToLeftEnabled",
                "rtl",
                "darkTheme",
                "prefix",
                "themeRoot",
            ],
        );

        let flag = |keys: &[&str]| -> Result<Option<bool>, ConfigError> {
            lookup(map, parent, keys)
                .map(|(path, value)| expect_bool(value, &path))
                .transpose()
        };

        let theme_list = lookup(map, parent, THEME_LIST_KEYS)
            .map(|(path, value)| validate::theme_list(value, &path))
            .transpose()?;

        let (dark_theme, dark_theme_path) = match lookup(map, parent, DARK_THEME_KEYS) {
            Some((path, value)) => (Some(expect_str(value, &path)?.to_string()), Some(path)),
            None => (None, None),
        };

        let prefix = lookup(map, parent, PREFIX_KEYS)
            .map(|(path, value)| validate::prefix(expect_str(value, &path)?, &path))
            .transpose()?;

        let theme_root = lookup(map, parent, THEME_ROOT_KEYS)
            .map(|(path, value)| validate::theme_root(expect_str(value, &path)?, &path))
            .transpose()?;

        Ok(Self {
            theme_list,
            base_styles_enabled: flag(BASE_KEYS)?,
            component_styles_enabled: flag(STYLED_KEYS)?,
            utility_classes_enabled: flag(UTILS_KEYS)?,
            logging_enabled: flag(LOGS_KEYS)?,
            right_to_left_enabled: flag(RTL_KEYS)?,
            dark_theme,
            dark_theme_path,
            prefix,
            theme_root,
        })
    }

    fn then(self, later: PluginOptionsOverlay) -> PluginOptionsOverlay {
        PluginOptionsOverlay {
            theme_list: later.theme_list.or(self.theme_list),
            base_styles_enabled: later.base_styles_enabled.or(self.base_styles_enabled),
            component_styles_enabled: later
                .component_styles_enabled
                .or(self.component_styles_enabled),
            utility_classes_enabled: later
                .utility_classes_enabled
                .or(self.utility_classes_enabled),
            logging_enabled: later.logging_enabled.or(self.logging_enabled),
            right_to_left_enabled: later.right_to_left_enabled.or(self.right_to_left_enabled),
            dark_theme: later.dark_theme.or(self.dark_theme),
            dark_theme_path: later.dark_theme_path.or(self.dark_theme_path),
            prefix: later.prefix.or(self.prefix),
            theme_root: later.theme_root.or(self.theme_root),
        }
    }

    /// Apply this layer onto resolved options.
    pub(crate) fn apply(&self, base: &PluginOptions) -> PluginOptions {
        PluginOptions {
            theme_list: self
                .theme_list
                .clone()
                .unwrap_or_else(|| base.theme_list.clone()),
            base_styles_enabled: self.base_styles_enabled.unwrap_or(base.base_styles_enabled),
            component_styles_enabled: self
                .component_styles_enabled
                .unwrap_or(base.component_styles_enabled),
            utility_classes_enabled: self
                .utility_classes_enabled
                .unwrap_or(base.utility_classes_enabled),
            logging_enabled: self.logging_enabled.unwrap_or(base.logging_enabled),
            right_to_left_enabled: self
                .right_to_left_enabled
                .unwrap_or(base.right_to_left_enabled),
            dark_theme: self
                .dark_theme
                .clone()
                .unwrap_or_else(|| base.dark_theme.clone()),
            prefix: self.prefix.clone().unwrap_or_else(|| base.prefix.clone()),
            theme_root: self
                .theme_root
                .clone()
                .unwrap_or_else(|| base.theme_root.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_empty_overlay() {
        let overlay = ConfigOverlay::from_value(&json!({})).unwrap();
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_overlay_fields_are_optional() {
        let overlay = ConfigOverlay::from_value(&json!({ "pluginOptions": { "rtl": true } })).unwrap();
        assert_eq!(overlay.content_globs(), None);
        assert_eq!(overlay.plugin_options.right_to_left_enabled, Some(true));
        assert_eq!(overlay.plugin_options.theme_list, None);
    }

    #[test]
    fn test_overlay_still_validates_fields() {
        let err = ConfigOverlay::from_value(&json!({ "content": [] })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyGlobList);

        let err = ConfigOverlay::from_value(&json!({ "daisyui": { "logs": "no" } })).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFieldType);
        assert_eq!(err.field_path(), Some("daisyui.logs"));
    }

    #[test]
    fn test_theme_extend_path_is_reported() {
        let err = ConfigOverlay::from_value(&json!({
            "theme": { "extend": { "colors": { "primary": "red" } } }
        }))
        .unwrap_err();
        assert_eq!(err.field_path(), Some("theme.extend.colors.primary"));
    }

    #[test]
    fn test_theme_without_extend_is_ignored() {
        let overlay = ConfigOverlay::from_value(&json!({ "theme": { "screens": {} } })).unwrap();
        assert!(overlay.theme_extensions.is_empty());
    }

    #[test]
    fn test_plugin_options_must_be_object() {
        let err = ConfigOverlay::from_value(&json!({ "daisyui": ["dark"] })).unwrap_err();
        assert_eq!(err.field_path(), Some("daisyui"));
    }

    #[test]
    fn test_then_later_wins() {
        let first = ConfigOverlay::from_value(&json!({
            "content": ["a/*.html"],
            "themeExtensions": { "colors": { "primary": "#000000", "accent": "#111111" } },
            "pluginOptions": { "rtl": true, "logs": false }
        }))
        .unwrap();
        let second = ConfigOverlay::from_value(&json!({
            "themeExtensions": { "colors": { "primary": "#ffffff" } },
            "pluginOptions": { "rtl": false }
        }))
        .unwrap();

        let composed = first.then(second);
        assert_eq!(composed.content_globs(), Some(&["a/*.html".to_string()][..]));
        assert_eq!(composed.theme_extensions["colors"]["primary"], "#ffffff");
        assert_eq!(composed.theme_extensions["colors"]["accent"], "#111111");
        assert_eq!(composed.plugin_options.right_to_left_enabled, Some(false));
        assert_eq!(composed.plugin_options.logging_enabled, Some(false));
    }

    #[test]
    fn test_apply_keeps_unset_options() {
        let layer = PluginOptionsOverlay {
            prefix: Some("ds-".into()),
            ..Default::default()
        };
        let applied = layer.apply(&PluginOptions::default());
        assert_eq!(applied.prefix, "ds-");
        assert_eq!(applied, PluginOptions { prefix: "ds-".into(), ..PluginOptions::default() });
    }
}
