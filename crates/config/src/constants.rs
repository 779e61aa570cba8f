//! Centralized constants for the stylekit workspace.
//!
//! This module contains the static reference data and default values shared
//! by the loader and the CLI, so theme names and option defaults live in one place.

// =============================================================================
// Built-in Themes
// =============================================================================

/// Closed set of theme names shipped by the component-theme plugin.
///
/// The order is canonical: it is the order used when every built-in theme is
/// selected at once (`themes = true`).
pub const BUILTIN_THEMES: [&str; 29] = [
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
];

/// Themes enabled when the theme list is omitted or set to `false`.
pub const DEFAULT_THEME_LIST: [&str; 2] = ["light", "dark"];

/// Tokens a custom theme must define to count as a full definition.
pub const REQUIRED_THEME_TOKENS: [&str; 5] = ["primary", "secondary", "accent", "neutral", "base-100"];

// =============================================================================
// Plugin Option Defaults
// =============================================================================

/// Default theme applied for `prefers-color-scheme: dark`.
pub const DEFAULT_DARK_THEME: &str = "dark";

/// Default selector that receives theme variables.
pub const DEFAULT_THEME_ROOT: &str = ":root";

/// Default component class prefix (none).
pub const DEFAULT_PREFIX: &str = "";

// =============================================================================
// Theme Extension Categories
// =============================================================================

/// Extension category whose token values must be `#RRGGBB` colors.
pub const COLORS_CATEGORY: &str = "colors";

/// Returns true if `name` is one of the [`BUILTIN_THEMES`].
///
/// Matching is exact; theme names are case-sensitive.
pub fn is_builtin_theme(name: &str) -> bool {
    BUILTIN_THEMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_themes_are_unique() {
        let unique: HashSet<_> = BUILTIN_THEMES.iter().collect();
        assert_eq!(unique.len(), BUILTIN_THEMES.len());
    }

    #[test]
    fn test_default_themes_are_builtin() {
        for name in DEFAULT_THEME_LIST {
            assert!(is_builtin_theme(name), "{name} should be built-in");
        }
        assert!(is_builtin_theme(DEFAULT_DARK_THEME));
    }

    #[test]
    fn test_builtin_lookup_is_case_sensitive() {
        assert!(is_builtin_theme("synthwave"));
        assert!(!is_builtin_theme("Synthwave"));
        assert!(!is_builtin_theme("solarized"));
    }
}
