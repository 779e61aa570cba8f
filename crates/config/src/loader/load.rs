//! The `load` and `merge` operations.
//!
//! Responsibilities:
//! - Turn a raw structured value into a validated `StylingConfig` (`load`).
//! - Layer a `ConfigOverlay` onto a validated base (`merge`).
//!
//! Does NOT handle:
//! - Reading or parsing files (see `source.rs`).
//! - Per-field validation rules (see `validate.rs`).
//!
//! Invariants:
//! - Both operations are pure: no I/O, no globals, no mutation of their inputs.
//! - On error nothing is returned; there is no partially applied configuration.
//! - The returned `content_globs` and theme list preserve input order exactly.

use serde_json::Value;

use super::error::ConfigError;
use super::fields::{expect_object, lookup};
use super::overlay::{CONTENT_KEYS, ConfigOverlay, extend_tokens};
use super::validate;
use crate::types::{PluginOptions, StylingConfig};

/// Load and validate a styling configuration from a raw structured value.
///
/// `raw` must be an object with a non-empty `content` array (also accepted as
/// `contentGlobs`, the key used when a loaded configuration is serialized). Every other field
/// is optional and defaulted; unknown fields are ignored.
///
/// # Errors
///
/// - `MissingField` if `content` is absent
/// - `EmptyGlobList` if `content` has no entries
/// - `InvalidGlobPattern` if an entry is not a non-empty string or is not a valid glob
/// - `InvalidColorFormat` if a `colors` token or custom theme color is not `#RRGGBB`
/// - `DuplicateTheme` if a theme name appears twice in the theme list
/// - `UnknownThemeName` if a theme is neither built-in nor fully defined
/// - `InvalidFieldType` / `InvalidValue` for malformed optional fields
pub fn load(raw: &Value) -> Result<StylingConfig, ConfigError> {
    let root = expect_object(raw, "")?;
    if lookup(root, "", CONTENT_KEYS).is_none() {
        return Err(ConfigError::MissingField {
            path: "content".to_string(),
        });
    }

    let ConfigOverlay {
        content_globs,
        theme_extensions,
        plugins,
        plugin_options,
    } = ConfigOverlay::from_map(root)?;

    let config = StylingConfig {
        content_globs: content_globs.ok_or_else(|| ConfigError::MissingField {
            path: "content".to_string(),
        })?,
        theme_extensions,
        plugins: plugins.unwrap_or_default(),
        plugin_options: plugin_options.apply(&PluginOptions::default()),
    };
    validate::resolved(&config, plugin_options.dark_theme_path.as_deref())?;

    tracing::debug!(
        content_globs = config.content_globs.len(),
        extension_categories = config.theme_extensions.len(),
        plugins = config.plugins.len(),
        themes = config.plugin_options.theme_list.len(),
        "Loaded styling configuration"
    );

    Ok(config)
}

/// Layer `overlay` onto `base`, returning a new validated configuration.
///
/// Top-level fields merge shallowly: content globs, plugins, and the theme list
/// are replaced wholesale when the overlay sets them. Theme extensions merge one
/// level deep (category by category, token by token) with the overlay winning.
/// Plugin options are replaced per option.
///
/// Merging is idempotent (`merge(merge(b, o), o) == merge(b, o)`) and
/// associative under left-to-right application (see [`ConfigOverlay::then`]),
/// but not commutative.
///
/// # Errors
///
/// Returns `UnknownThemeName` if the merged `darkTheme` no longer resolves
/// against the merged theme list. The error points at the overlay's `darkTheme`
/// key when the overlay sets one.
pub fn merge(base: &StylingConfig, overlay: &ConfigOverlay) -> Result<StylingConfig, ConfigError> {
    let mut theme_extensions = base.theme_extensions.clone();
    extend_tokens(&mut theme_extensions, overlay.theme_extensions.clone());

    let merged = StylingConfig {
        content_globs: overlay
            .content_globs
            .clone()
            .unwrap_or_else(|| base.content_globs.clone()),
        theme_extensions,
        plugins: overlay
            .plugins
            .clone()
            .unwrap_or_else(|| base.plugins.clone()),
        plugin_options: overlay.plugin_options.apply(&base.plugin_options),
    };
    validate::resolved(&merged, overlay.plugin_options.dark_theme_path.as_deref())?;

    tracing::debug!(
        replaced_content = overlay.content_globs.is_some(),
        replaced_themes = overlay.plugin_options.theme_list.is_some(),
        extension_categories = overlay.theme_extensions.len(),
        "Merged configuration overlay"
    );

    Ok(merged)
}
