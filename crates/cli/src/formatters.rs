//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide text, JSON, and YAML output formats.
//! - Write formatted output to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Error output (see `error::render_error`).
//!
//! Invariants:
//! - Machine-readable formats serialize the normalized configuration with
//!   canonical camelCase keys that `load` accepts back unchanged.
//! - Every formatted string ends with a newline.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use stylekit_config::StylingConfig;

pub use crate::commands::check::CheckSummary;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json, yaml", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the effective configuration.
    fn format_config(&self, config: &StylingConfig) -> Result<String>;

    /// Format a successful check.
    fn format_check(&self, summary: &CheckSummary) -> Result<String>;

    /// Format the built-in theme names.
    fn format_themes(&self, themes: &[&str]) -> Result<String>;
}

/// Get a formatter for the given format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Human-readable formatter.
pub struct TextFormatter;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

impl Formatter for TextFormatter {
    fn format_config(&self, config: &StylingConfig) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "Content globs:")?;
        for glob in &config.content_globs {
            writeln!(out, "  {glob}")?;
        }

        writeln!(out, "Theme extensions:")?;
        if config.theme_extensions.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (category, tokens) in &config.theme_extensions {
            for (name, value) in tokens {
                writeln!(out, "  {category}.{name} = {value}")?;
            }
        }

        writeln!(out, "Plugins: {}", or_none(&config.plugins.join(", ")))?;

        let options = &config.plugin_options;
        let themes: Vec<String> = options.theme_list.iter().map(ToString::to_string).collect();
        writeln!(out, "Plugin options:")?;
        writeln!(out, "  Themes: {}", themes.join(", "))?;
        writeln!(out, "  Dark theme: {}", options.dark_theme)?;
        writeln!(out, "  Base styles: {}", on_off(options.base_styles_enabled))?;
        writeln!(out, "  Component styles: {}", on_off(options.component_styles_enabled))?;
        writeln!(out, "  Utility classes: {}", on_off(options.utility_classes_enabled))?;
        writeln!(out, "  Logging: {}", on_off(options.logging_enabled))?;
        writeln!(out, "  Right-to-left: {}", on_off(options.right_to_left_enabled))?;
        writeln!(out, "  Prefix: {}", or_none(&options.prefix))?;
        writeln!(out, "  Theme root: {}", options.theme_root)?;

        Ok(out)
    }

    fn format_check(&self, summary: &CheckSummary) -> Result<String> {
        let mut out = String::new();
        writeln!(
            out,
            "ok: {} ({} content globs, {} themes, {} plugins, {} overlays)",
            summary.config,
            summary.content_globs,
            summary.themes,
            summary.plugins,
            summary.overlays.len()
        )?;
        for overlay in &summary.overlays {
            writeln!(out, "  overlay: {overlay}")?;
        }
        Ok(out)
    }

    fn format_themes(&self, themes: &[&str]) -> Result<String> {
        let mut out = String::new();
        for theme in themes {
            writeln!(out, "{theme}")?;
        }
        Ok(out)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &StylingConfig) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(config)?))
    }

    fn format_check(&self, summary: &CheckSummary) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(summary)?))
    }

    fn format_themes(&self, themes: &[&str]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(themes)?))
    }
}

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_config(&self, config: &StylingConfig) -> Result<String> {
        Ok(serde_yaml::to_string(config)?)
    }

    fn format_check(&self, summary: &CheckSummary) -> Result<String> {
        Ok(serde_yaml::to_string(summary)?)
    }

    fn format_themes(&self, themes: &[&str]) -> Result<String> {
        Ok(serde_yaml::to_string(themes)?)
    }
}

/// Print formatted output, or write it to `output_file` when given.
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {} ({:?} format)", path.display(), format);
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to a temp file in the same
/// directory, then renames it into place.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to move temp file to {}", path.display()))?;

    Ok(())
}
