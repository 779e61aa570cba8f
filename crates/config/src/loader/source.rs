//! Configuration source files.
//!
//! Responsibilities:
//! - Read a declarative source file and parse it into a `serde_json::Value`.
//! - Select the parser from the file extension (JSON, TOML, YAML).
//! - Derive environment-specific overlay paths (`styles.production.json`).
//!
//! Does NOT handle:
//! - Validating the parsed value (see `load.rs`).
//!
//! Invariants:
//! - This is the only module in the crate that touches the filesystem.
//! - Parse errors include the parser's message but never the raw file content.

use serde_json::Value;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
    Yaml,
}

impl SourceFormat {
    /// Determine the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse source text in this format.
    pub fn parse(self, text: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Read and parse a configuration source file.
///
/// # Errors
///
/// - `UnsupportedSourceFormat` if the extension is not `.json`, `.toml`, `.yaml` or `.yml`
/// - `SourceRead` if the file cannot be read
/// - `SourceParse` if the content is not valid in its format
pub fn read_source(path: &Path) -> Result<Value, ConfigError> {
    let format = SourceFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedSourceFormat {
        path: path.to_path_buf(),
    })?;

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value = format.parse(&text).map_err(|message| ConfigError::SourceParse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::debug!(path = %path.display(), ?format, "Read configuration source");
    Ok(value)
}

/// Path of the environment overlay that sits next to `base`.
///
/// `styles.json` with environment `production` becomes `styles.production.json`.
/// Returns `None` if `base` has no file stem or `env` is blank.
pub fn environment_overlay_path(base: &Path, env: &str) -> Option<PathBuf> {
    let env = env.trim();
    if env.is_empty() {
        return None;
    }

    let stem = base.file_stem()?.to_str()?;
    let file_name = match base.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}.{env}.{ext}"),
        None => format!("{stem}.{env}"),
    };
    Some(base.with_file_name(file_name))
}
