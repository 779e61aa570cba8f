//! Field validators for raw configuration input.
//!
//! Responsibilities:
//! - Validate and normalize content globs, plugins, theme extensions, and theme lists.
//! - Perform cross-field checks on a fully assembled `StylingConfig`.
//!
//! Does NOT handle:
//! - Key lookup and JSON type helpers (see `fields.rs`).
//! - Deciding which fields are required (see `load.rs`).
//!
//! Invariants:
//! - Validators either return a complete value or the first error found, in input order.
//! - Content glob strings are stored exactly as written; trimming is only used for checks.

use globset::Glob;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

use super::error::ConfigError;
use super::fields::{expect_array, expect_object, index, join, type_name};
use crate::constants::{
    BUILTIN_THEMES, COLORS_CATEGORY, DEFAULT_THEME_LIST, REQUIRED_THEME_TOKENS, is_builtin_theme,
};
use crate::types::{CustomTheme, StylingConfig, ThemeExtensions, ThemeSelection, TokenMap, is_hex_color};

/// Canonical path of the dark theme option.
const DARK_THEME_PATH: &str = "pluginOptions.darkTheme";

/// Validate the `content` glob list.
pub(crate) fn content_globs(value: &Value, path: &str) -> Result<Vec<String>, ConfigError> {
    let entries = expect_array(value, path, "an array of glob patterns")?;
    if entries.is_empty() {
        return Err(ConfigError::EmptyGlobList {
            path: path.to_string(),
        });
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| glob_pattern(entry, &index(path, i)))
        .collect()
}

fn glob_pattern(value: &Value, path: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidGlobPattern {
        path: path.to_string(),
        message,
    };

    let Some(pattern) = value.as_str() else {
        return Err(invalid(format!("expected a string, got {}", type_name(value))));
    };

    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Err(invalid("pattern is empty".to_string()));
    }

    // A leading `!` excludes matches; the rest must still be a glob.
    let body = trimmed.strip_prefix('!').unwrap_or(trimmed);
    if body.is_empty() {
        return Err(invalid("exclusion `!` has no pattern".to_string()));
    }

    Glob::new(body).map_err(|err| invalid(err.kind().to_string()))?;
    Ok(pattern.to_string())
}

/// Validate the plugin identifier list.
pub(crate) fn plugins(value: &Value, path: &str) -> Result<Vec<String>, ConfigError> {
    let entries = expect_array(value, path, "an array of plugin identifiers")?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry_path = index(path, i);
            let id = entry.as_str().ok_or_else(|| ConfigError::InvalidFieldType {
                path: entry_path.clone(),
                expected: "a plugin identifier string",
            })?;
            let id = id.trim();
            if id.is_empty() {
                return Err(ConfigError::InvalidValue {
                    path: entry_path,
                    message: "plugin identifier is empty".to_string(),
                });
            }
            Ok(id.to_string())
        })
        .collect()
}

/// Validate theme extensions: category -> token -> value.
///
/// Values in the `colors` category must be `#RRGGBB`; other categories only
/// need string values.
pub(crate) fn theme_extensions(value: &Value, path: &str) -> Result<ThemeExtensions, ConfigError> {
    let categories = expect_object(value, path)?;
    let mut extensions = ThemeExtensions::new();

    for (category, tokens_value) in categories {
        let category_path = join(path, category);
        let tokens = expect_object(tokens_value, &category_path)?;
        let is_colors = category == COLORS_CATEGORY;

        let mut map = TokenMap::new();
        for (token, token_value) in tokens {
            let token_path = join(&category_path, token);
            let text = if is_colors {
                color_value(token_value, &token_path)?
            } else {
                token_value
                    .as_str()
                    .ok_or_else(|| ConfigError::InvalidFieldType {
                        path: token_path.clone(),
                        expected: "a string token value",
                    })?
            };
            map.insert(token.clone(), text.to_string());
        }

        extensions.insert(category.clone(), map);
    }

    Ok(extensions)
}

fn color_value<'a>(value: &'a Value, path: &str) -> Result<&'a str, ConfigError> {
    match value.as_str() {
        Some(text) if is_hex_color(text) => Ok(text),
        _ => Err(ConfigError::InvalidColorFormat {
            path: path.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Validate the theme list.
///
/// Accepts `true` (every built-in theme), `false` (light and dark), or an
/// array of built-in names and single-key custom theme objects.
pub(crate) fn theme_list(value: &Value, path: &str) -> Result<Vec<ThemeSelection>, ConfigError> {
    let entries = match value {
        Value::Bool(true) => return Ok(builtin_selections(&BUILTIN_THEMES)),
        Value::Bool(false) => return Ok(builtin_selections(&DEFAULT_THEME_LIST)),
        Value::Array(entries) => entries,
        _ => {
            return Err(ConfigError::InvalidFieldType {
                path: path.to_string(),
                expected: "a boolean or an array of themes",
            });
        }
    };

    let mut seen = HashSet::new();
    let mut selections = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        let entry_path = index(path, i);
        let selection = theme_entry(entry, &entry_path)?;

        if !seen.insert(selection.name().to_string()) {
            return Err(ConfigError::DuplicateTheme {
                path: entry_path,
                name: selection.name().to_string(),
            });
        }
        selections.push(selection);
    }

    Ok(selections)
}

fn builtin_selections(names: &[&str]) -> Vec<ThemeSelection> {
    names
        .iter()
        .map(|name| ThemeSelection::BuiltIn((*name).to_string()))
        .collect()
}

fn theme_entry(value: &Value, path: &str) -> Result<ThemeSelection, ConfigError> {
    match value {
        Value::String(name) if is_builtin_theme(name) => Ok(ThemeSelection::BuiltIn(name.clone())),
        Value::String(name) => Err(ConfigError::UnknownThemeName {
            path: path.to_string(),
            name: name.clone(),
            reason: "not a built-in theme and no custom definition was given".to_string(),
        }),
        Value::Object(map) => custom_theme(map, path).map(ThemeSelection::Custom),
        _ => Err(ConfigError::InvalidFieldType {
            path: path.to_string(),
            expected: "a theme name or custom theme object",
        }),
    }
}

fn custom_theme(map: &Map<String, Value>, path: &str) -> Result<CustomTheme, ConfigError> {
    let mut entries = map.iter();
    let (Some((name, definition)), None) = (entries.next(), entries.next()) else {
        return Err(ConfigError::InvalidFieldType {
            path: path.to_string(),
            expected: "an object with exactly one theme name key",
        });
    };

    if name.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            path: path.to_string(),
            message: "custom theme name is empty".to_string(),
        });
    }

    let definition_path = join(path, name);
    let tokens = expect_object(definition, &definition_path)?;

    let mut colors = BTreeMap::new();
    for (token, token_value) in tokens {
        let color = color_value(token_value, &join(&definition_path, token))?;
        colors.insert(token.clone(), color.to_string());
    }

    let missing: Vec<&str> = REQUIRED_THEME_TOKENS
        .iter()
        .copied()
        .filter(|token| !colors.contains_key(*token))
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::UnknownThemeName {
            path: definition_path,
            name: name.clone(),
            reason: format!(
                "custom definition is incomplete, missing: {}",
                missing.join(", ")
            ),
        });
    }

    Ok(CustomTheme {
        name: name.clone(),
        colors,
    })
}

/// Validate the component class prefix.
pub(crate) fn prefix(value: &str, path: &str) -> Result<String, ConfigError> {
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            path: path.to_string(),
            message: "prefix must not contain whitespace".to_string(),
        });
    }
    Ok(value.to_string())
}

/// Validate the theme root selector.
pub(crate) fn theme_root(value: &str, path: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            path: path.to_string(),
            message: "theme root selector is empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Cross-field checks on an assembled configuration.
///
/// # Checks
/// - `content_globs` is not empty
/// - `dark_theme` names a built-in theme or a custom theme in `theme_list`
///
/// `dark_theme_path` is where the dark theme was read from; without one the
/// canonical `pluginOptions.darkTheme` is reported.
pub(crate) fn resolved(
    config: &StylingConfig,
    dark_theme_path: Option<&str>,
) -> Result<(), ConfigError> {
    if config.content_globs.is_empty() {
        return Err(ConfigError::EmptyGlobList {
            path: "content".to_string(),
        });
    }

    let options = &config.plugin_options;
    let dark = options.dark_theme.as_str();
    let defined = is_builtin_theme(dark)
        || options
            .find_theme(dark)
            .is_some_and(ThemeSelection::is_custom);
    if !defined {
        return Err(ConfigError::UnknownThemeName {
            path: dark_theme_path.unwrap_or(DARK_THEME_PATH).to_string(),
            name: dark.to_string(),
            reason: "dark theme must be built-in or defined in the theme list".to_string(),
        });
    }

    Ok(())
}
