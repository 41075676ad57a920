//! Config file loading

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::schema::Config;

/// Load a configuration file, dispatching on extension.
///
/// Parse failures are hard errors here; use [`load_override`] for the
/// soft-fail behavior applied to auto-discovered files.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed reading config file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, path),
        "yaml" | "yml" => parse_yaml_config(&content, path),
        "json" => parse_json_config(&content, path),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            path.display()
        ),
    }
}

/// Load the override layer: an explicit path, or the first discovery
/// candidate found next to the base config.
///
/// An explicitly named file that fails to parse is an error. An
/// auto-discovered one warns and falls back to the empty configuration, so a
/// broken optional file never blocks the run.
pub fn load_override(dir: &Path, override_path: Option<&Path>) -> Result<Config> {
    let override_path_provided = override_path.is_some();

    let discovered = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_override(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    match load_config(&config_file) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            if override_path_provided {
                return Err(e);
            }
            tracing::warn!(
                "Failed to parse auto-discovered override {}: {}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;
    raw.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn parse_json_config(content: &str, config_file: &Path) -> Result<Config> {
    serde_json::from_str(content)
        .with_context(|| format!("Invalid JSON config: {}", config_file.display()))
}

fn discover_override(dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "testconf.toml",
        ".testconf.toml",
        "testconf.yaml",
        ".testconf.yaml",
        "testconf.yml",
        ".testconf.yml",
        "testconf.json",
        ".testconf.json",
    ];

    for candidate in candidates {
        let path = dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
