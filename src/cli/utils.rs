//! Shared CLI helpers

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::Config;

/// Serialization format for emitted configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
}

pub fn render(config: &Config, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(config).context("rendering config as JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Toml => toml::to_string_pretty(config).context("rendering config as TOML"),
        OutputFormat::Yaml => serde_yaml::to_string(config).context("rendering config as YAML"),
    }
}
