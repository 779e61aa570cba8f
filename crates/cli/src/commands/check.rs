//! Check command implementation.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config_context::ConfigContext;
use crate::formatters::{OutputFormat, get_formatter, output_result};

/// Summary printed when a configuration is valid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub status: &'static str,
    pub config: String,
    pub overlays: Vec<String>,
    pub content_globs: usize,
    pub themes: usize,
    pub plugins: usize,
}

impl CheckSummary {
    fn from_context(context: &ConfigContext) -> Self {
        Self {
            status: "ok",
            config: context.base.display().to_string(),
            overlays: context
                .overlays
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
            content_globs: context.config.content_globs.len(),
            themes: context.config.plugin_options.theme_list.len(),
            plugins: context.config.plugins.len(),
        }
    }
}

pub fn run(context: ConfigContext, output_format: &str, output_file: Option<&Path>) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    info!("Configuration is valid");

    let summary = CheckSummary::from_context(&context);
    let output = get_formatter(format).format_check(&summary)?;
    output_result(&output, format, output_file)
}
