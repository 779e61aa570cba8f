//! Theme selection types.
//!
//! Responsibilities:
//! - Define `ThemeSelection`, one entry of the plugin's ordered theme list.
//! - Define `CustomTheme`, a user-supplied theme with its own color tokens.
//! - Provide the `#RRGGBB` color check shared by theme extensions and custom themes.
//!
//! Does NOT handle:
//! - Parsing theme lists from raw input (see `loader::validate`).
//! - Rendering themes into stylesheets (external build tool).
//!
//! Invariants:
//! - A `CustomTheme` produced by the loader always defines every token in
//!   `REQUIRED_THEME_TOKENS`, and every token value is a `#RRGGBB` color.
//! - Serialized form mirrors the raw input: built-ins as plain strings, custom
//!   themes as `{ "<name>": { "<token>": "#RRGGBB" } }`.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One entry of the theme list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSelection {
    /// A theme from `BUILTIN_THEMES`.
    BuiltIn(String),
    /// A user-defined theme carrying a full definition.
    Custom(CustomTheme),
}

impl ThemeSelection {
    /// Name used for precedence, duplicate detection, and `darkTheme` lookup.
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltIn(name) => name,
            Self::Custom(theme) => &theme.name,
        }
    }

    /// Returns true if this selection carries its own definition.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn(name) => f.write_str(name),
            Self::Custom(theme) => write!(f, "{} (custom)", theme.name),
        }
    }
}

impl Serialize for ThemeSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::BuiltIn(name) => serializer.serialize_str(name),
            Self::Custom(theme) => theme.serialize(serializer),
        }
    }
}

/// A user-defined theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTheme {
    pub name: String,
    /// Token name to `#RRGGBB` color, e.g. `base-100 -> #1d232a`.
    pub colors: BTreeMap<String, String>,
}

impl Serialize for CustomTheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.colors)?;
        map.end()
    }
}

/// Returns true if `value` is a `#RRGGBB` color (hex digits in either case).
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
