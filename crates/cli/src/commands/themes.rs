//! Themes command implementation.

use anyhow::Result;
use std::path::Path;
use stylekit_config::BUILTIN_THEMES;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(output_format: &str, output_file: Option<&Path>) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let output = get_formatter(format).format_themes(&BUILTIN_THEMES)?;
    output_result(&output, format, output_file)
}
