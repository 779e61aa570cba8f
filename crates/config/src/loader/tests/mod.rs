//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test `load` required fields, defaults, and error kinds.
//! - Test theme list handling (built-ins, custom themes, duplicates).
//! - Test `merge` layering semantics.
//! - Test the `ConfigLoader` builder with values and files.
//!
//! Does NOT handle:
//! - Per-field validator edge cases (tested in `validate.rs`).
//! - Source parsing details (tested in `source.rs`).
//!
//! Invariants:
//! - Temporary directories are cleaned up automatically via `tempfile`.

use serde_json::{Value, json};


/// The original pipeline configuration, in the upstream tool's own layout.
pub fn upstream_config() -> Value {
    json!({
        "content": ["./templates/**/*.html", "./static/js/**/*.js", "./**/*.py"],
        "theme": {
            "extend": {
                "colors": {
                    "primary": "#00ed64",
                    "primary-focus": "#00d95a"
                }
            }
        },
        "plugins": ["daisyui"],
        "daisyui": {
            "themes": [
                "light", "dark", "cupcake", "bumblebee", "emerald", "corporate",
                "synthwave", "retro", "cyberpunk", "valentine", "halloween", "garden",
                "forest", "aqua", "lofi", "pastel", "fantasy", "wireframe", "black",
                "luxury", "dracula", "cmyk", "autumn", "business", "acid", "lemonade",
                "night", "coffee", "winter"
            ],
            "base": true,
            "styled": true,
            "utils": true,
            "logs": true,
            "rtl": false
        }
    })
}

/// A complete custom theme definition object for use in a theme list.
pub fn custom_theme(name: &str) -> Value {
    json!({
        name: {
            "primary": "#00ed64",
            "secondary": "#00d95a",
            "accent": "#1fb2a6",
            "neutral": "#2a323c",
            "base-100": "#1d232a"
        }
    })
}
