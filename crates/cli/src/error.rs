//! CLI exit codes and error reporting for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//! - Render errors as `error[<Kind>] at <path>: <message>`.
//!
//! Does NOT handle:
//! - Deciding what is invalid (see `stylekit_config`).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for specific error categories.
//! - Errors without a ConfigError in their chain always map to `GeneralError`.

use stylekit_config::{ConfigError, ErrorKind};

/// Structured exit codes for stylekit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - the configuration content is invalid.
    ///
    /// Scripts should fix the reported field and not retry unchanged.
    ValidationError = 2,

    /// Source error - a file is missing, unreadable, or not parseable.
    SourceError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err.kind() {
            ErrorKind::MissingField
            | ErrorKind::EmptyGlobList
            | ErrorKind::InvalidGlobPattern
            | ErrorKind::InvalidColorFormat
            | ErrorKind::DuplicateTheme
            | ErrorKind::UnknownThemeName
            | ErrorKind::InvalidFieldType
            | ErrorKind::InvalidValue => ExitCode::ValidationError,

            ErrorKind::MissingSource
            | ErrorKind::SourceRead
            | ErrorKind::SourceParse
            | ErrorKind::UnsupportedSourceFormat => ExitCode::SourceError,
        }
    }
}

/// Find the first ConfigError in an anyhow chain.
fn find_config_error(err: &anyhow::Error) -> Option<&ConfigError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error chain holds no ConfigError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        find_config_error(self)
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

/// Render an error for stderr.
///
/// Configuration errors lead with their kind and field path; any surrounding
/// context (which file failed) follows on the next line.
pub fn render_error(err: &anyhow::Error) -> String {
    let Some(config_err) = find_config_error(err) else {
        return format!("error: {err:#}");
    };

    let headline = match config_err.field_path() {
        Some(path) => format!("error[{}] at {}: {}", config_err.kind(), path, config_err),
        None => format!("error[{}]: {}", config_err.kind(), config_err),
    };

    let context = err.to_string();
    if context == config_err.to_string() {
        headline
    } else {
        format!("{headline}\n  while: {context}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ValidationError.as_i32(), 2);
        assert_eq!(ExitCode::SourceError.as_i32(), 3);
    }

    #[test]
    fn test_from_config_error_validation() {
        let err = ConfigError::EmptyGlobList {
            path: "content".into(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_from_config_error_source() {
        let err = ConfigError::SourceParse {
            path: PathBuf::from("styles.json"),
            message: "expected value".into(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SourceError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::DuplicateTheme {
            path: "pluginOptions.themeList[1]".into(),
            name: "dark".into(),
        });
        let err = result.context("Invalid configuration styles.json").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("Invalid output format: xml");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_render_error_with_path() {
        let err = anyhow::Error::new(ConfigError::MissingField {
            path: "content".into(),
        });
        let rendered = render_error(&err);
        assert!(
            rendered.starts_with("error[MissingField] at content: "),
            "rendered: {rendered}"
        );
        assert!(!rendered.contains("while:"));
    }

    #[test]
    fn test_render_error_keeps_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::InvalidColorFormat {
            path: "themeExtensions.colors.primary".into(),
            value: "green".into(),
        });
        let err = result.context("Invalid configuration styles.json").unwrap_err();
        let rendered = render_error(&err);
        assert!(rendered.starts_with("error[InvalidColorFormat] at themeExtensions.colors.primary: "));
        assert!(rendered.contains("while: Invalid configuration styles.json"));
    }

    #[test]
    fn test_render_plain_error() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(render_error(&err), "error: boom");
    }
}
