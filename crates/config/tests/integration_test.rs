//! Integration tests for configuration loading through the public API.
//!
//! These tests exercise `load`, `merge`, and the `ConfigLoader` builder chain
//! the way the CLI uses them, including layered files on disk.

use serde_json::json;
use std::sync::Arc;
use stylekit_config::{
    BUILTIN_THEMES, ConfigError, ConfigLoader, ConfigOverlay, ErrorKind, StylingConfig,
    ThemeSelection, environment_overlay_path, load, merge, read_source,
};
use tempfile::TempDir;

#[test]
fn test_load_preserves_content_and_theme_order() {
    let config = load(&json!({
        "content": ["./templates/**/*.html"],
        "pluginOptions": { "themeList": ["light", "dark"] }
    }))
    .expect("should load");

    assert_eq!(config.content_globs, vec!["./templates/**/*.html"]);
    assert_eq!(
        config.plugin_options.theme_list,
        vec![
            ThemeSelection::BuiltIn("light".into()),
            ThemeSelection::BuiltIn("dark".into())
        ]
    );
}

#[test]
fn test_load_empty_content_fails() {
    let result = load(&json!({ "content": [] }));
    assert!(matches!(result, Err(ConfigError::EmptyGlobList { .. })));
}

#[test]
fn test_load_color_extension() {
    let config = load(&json!({
        "content": ["x"],
        "themeExtensions": { "colors": { "primary": "#00ed64" } }
    }))
    .expect("should load");

    assert_eq!(config.theme_extensions["colors"]["primary"], "#00ed64");
}

#[test]
fn test_load_duplicate_theme_fails() {
    let result = load(&json!({
        "content": ["x"],
        "pluginOptions": { "themeList": ["dark", "dark"] }
    }));
    assert!(matches!(result, Err(ConfigError::DuplicateTheme { .. })));
}

#[test]
fn test_builtin_theme_list_is_closed() {
    assert_eq!(BUILTIN_THEMES.len(), 29);
    let result = load(&json!({ "content": ["x"], "daisyui": { "themes": ["retro", "vaporwave"] } }));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::UnknownThemeName);
}

#[test]
fn test_merge_through_public_overlay() {
    let base = load(&json!({
        "content": ["./templates/**/*.html"],
        "themeExtensions": { "colors": { "primary": "#00ed64" } }
    }))
    .expect("base should load");
    let overlay = ConfigOverlay::from_value(&json!({
        "themeExtensions": { "colors": { "primary-focus": "#00d95a" } }
    }))
    .expect("overlay should parse");

    let merged = merge(&base, &overlay).expect("merge should succeed");
    assert_eq!(merged.token("colors", "primary"), Some("#00ed64"));
    assert_eq!(merged.token("colors", "primary-focus"), Some("#00d95a"));
    assert_eq!(merged.content_globs, base.content_globs);
}

#[test]
fn test_config_shared_across_threads() {
    let config: Arc<StylingConfig> = Arc::new(
        load(&json!({ "content": ["./**/*.py"], "plugins": ["daisyui"] })).expect("should load"),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || config.has_plugin("daisyui"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread should not panic"));
    }
}

/// Test the layered file workflow: base file plus environment sibling overlay.
#[test]
fn test_environment_overlay_workflow() {
    let dir = TempDir::new().expect("tempdir");
    let base = dir.path().join("styles.json");
    std::fs::write(
        &base,
        r##"{
            "content": ["./templates/**/*.html", "./static/js/**/*.js", "./**/*.py"],
            "theme": { "extend": { "colors": { "primary": "#00ed64", "primary-focus": "#00d95a" } } },
            "plugins": ["daisyui"],
            "daisyui": { "themes": ["light", "dark"], "logs": true }
        }"##,
    )
    .expect("write base");

    let overlay = environment_overlay_path(&base, "production").expect("overlay path");
    assert_eq!(overlay, dir.path().join("styles.production.json"));
    std::fs::write(&overlay, r#"{ "daisyui": { "logs": false } }"#).expect("write overlay");

    let config = ConfigLoader::new()
        .with_source_file(&base)
        .and_then(|loader| loader.with_overlay_file(&overlay))
        .and_then(ConfigLoader::build)
        .expect("should build");

    assert!(!config.plugin_options.logging_enabled);
    assert_eq!(config.content_globs.len(), 3);
    assert_eq!(config.token("colors", "primary-focus"), Some("#00d95a"));
}

#[test]
fn test_read_source_formats_agree() {
    let dir = TempDir::new().expect("tempdir");
    let json_path = dir.path().join("styles.json");
    let yaml_path = dir.path().join("styles.yml");
    let toml_path = dir.path().join("styles.toml");

    std::fs::write(
        &json_path,
        r##"{ "content": ["./**/*.py"], "daisyui": { "themes": ["cupcake"], "rtl": true } }"##,
    )
    .expect("write json");
    std::fs::write(
        &yaml_path,
        "content:\n  - ./**/*.py\ndaisyui:\n  themes: [cupcake]\n  rtl: true\n",
    )
    .expect("write yaml");
    std::fs::write(
        &toml_path,
        "content = [\"./**/*.py\"]\n\n[daisyui]\nthemes = [\"cupcake\"]\nrtl = true\n",
    )
    .expect("write toml");

    let from_json = load(&read_source(&json_path).expect("json")).expect("load json");
    let from_yaml = load(&read_source(&yaml_path).expect("yaml")).expect("load yaml");
    let from_toml = load(&read_source(&toml_path).expect("toml")).expect("load toml");

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_unsupported_source_format() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("tailwind.config.js");
    std::fs::write(&path, "module.exports = {}").expect("write");

    let err = read_source(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedSourceFormat);
    assert!(!err.is_validation());
}

#[test]
fn test_normalized_output_uses_canonical_keys() {
    let config = load(&json!({
        "content": ["x"],
        "daisyui": { "themes": ["dark"], "rtl": true }
    }))
    .expect("should load");

    let value = serde_json::to_value(&config).expect("serialize");
    assert_eq!(value["contentGlobs"], json!(["x"]));
    assert_eq!(value["pluginOptions"]["themeList"], json!(["dark"]));
    assert_eq!(value["pluginOptions"]["rightToLeftEnabled"], json!(true));
}
