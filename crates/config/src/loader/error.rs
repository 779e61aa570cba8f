//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading and merging failures.
//! - Classify errors into a stable `ErrorKind` for reporting.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Every validation variant carries the offending field path (e.g.
//!   `theme.extend.colors.primary`, `pluginOptions.themeList[1]`).
//! - Validation errors are never retryable; source errors relate to I/O or syntax.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, merging, or reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field `{path}`")]
    MissingField { path: String },

    #[error("`{path}` must list at least one glob pattern")]
    EmptyGlobList { path: String },

    #[error("invalid glob pattern at `{path}`: {message}")]
    InvalidGlobPattern { path: String, message: String },

    #[error("invalid color at `{path}`: expected #RRGGBB, got {value}")]
    InvalidColorFormat { path: String, value: String },

    #[error("theme '{name}' is listed more than once (`{path}`)")]
    DuplicateTheme { path: String, name: String },

    #[error("unknown theme '{name}' at `{path}`: {reason}")]
    UnknownThemeName {
        path: String,
        name: String,
        reason: String,
    },

    #[error("`{path}` must be {expected}")]
    InvalidFieldType { path: String, expected: &'static str },

    #[error("invalid value for `{path}`: {message}")]
    InvalidValue { path: String, message: String },

    #[error("no configuration source was provided")]
    MissingSource,

    #[error("failed to read configuration source at {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration source at {path}: {message}")]
    SourceParse { path: PathBuf, message: String },

    #[error("unsupported configuration source format at {path} (expected .json, .toml, .yaml or .yml)")]
    UnsupportedSourceFormat { path: PathBuf },
}

/// Stable classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingField,
    EmptyGlobList,
    InvalidGlobPattern,
    InvalidColorFormat,
    DuplicateTheme,
    UnknownThemeName,
    InvalidFieldType,
    InvalidValue,
    MissingSource,
    SourceRead,
    SourceParse,
    UnsupportedSourceFormat,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "MissingField",
            Self::EmptyGlobList => "EmptyGlobList",
            Self::InvalidGlobPattern => "InvalidGlobPattern",
            Self::InvalidColorFormat => "InvalidColorFormat",
            Self::DuplicateTheme => "DuplicateTheme",
            Self::UnknownThemeName => "UnknownThemeName",
            Self::InvalidFieldType => "InvalidFieldType",
            Self::InvalidValue => "InvalidValue",
            Self::MissingSource => "MissingSource",
            Self::SourceRead => "SourceRead",
            Self::SourceParse => "SourceParse",
            Self::UnsupportedSourceFormat => "UnsupportedSourceFormat",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::EmptyGlobList { .. } => ErrorKind::EmptyGlobList,
            Self::InvalidGlobPattern { .. } => ErrorKind::InvalidGlobPattern,
            Self::InvalidColorFormat { .. } => ErrorKind::InvalidColorFormat,
            Self::DuplicateTheme { .. } => ErrorKind::DuplicateTheme,
            Self::UnknownThemeName { .. } => ErrorKind::UnknownThemeName,
            Self::InvalidFieldType { .. } => ErrorKind::InvalidFieldType,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::MissingSource => ErrorKind::MissingSource,
            Self::SourceRead { .. } => ErrorKind::SourceRead,
            Self::SourceParse { .. } => ErrorKind::SourceParse,
            Self::UnsupportedSourceFormat { .. } => ErrorKind::UnsupportedSourceFormat,
        }
    }

    /// Path of the offending field, for validation errors.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::MissingField { path }
            | Self::EmptyGlobList { path }
            | Self::InvalidGlobPattern { path, .. }
            | Self::InvalidColorFormat { path, .. }
            | Self::DuplicateTheme { path, .. }
            | Self::UnknownThemeName { path, .. }
            | Self::InvalidFieldType { path, .. }
            | Self::InvalidValue { path, .. } => Some(path),
            Self::MissingSource
            | Self::SourceRead { .. }
            | Self::SourceParse { .. }
            | Self::UnsupportedSourceFormat { .. } => None,
        }
    }

    /// Returns true if the configuration content itself is invalid, as opposed
    /// to the source being unreadable or absent.
    pub fn is_validation(&self) -> bool {
        self.field_path().is_some()
    }
}
