//! Show command implementation.

use anyhow::Result;
use std::path::Path;

use crate::config_context::ConfigContext;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(context: ConfigContext, output_format: &str, output_file: Option<&Path>) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let output = get_formatter(format).format_config(&context.config)?;
    output_result(&output, format, output_file)
}
