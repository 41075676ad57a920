//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use super::utils::{render, OutputFormat};
use crate::config::{effective_config, load_config, load_override, Config};

#[derive(Args)]
pub struct ResolveArgs {
    /// Base configuration file exported by the build tool
    #[arg(short, long, value_name = "FILE")]
    pub base: Option<PathBuf>,

    /// Override configuration file (auto-discovered next to the base when omitted)
    #[arg(short = 'o', long = "override-file", value_name = "FILE")]
    pub override_file: Option<PathBuf>,

    /// Output format for the effective configuration
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write the effective configuration to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let base = match args.base.as_deref() {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    // The override's own location anchors relative roots; fall back to the
    // base config's directory, then the working directory.
    let anchor_dir = match (&args.override_file, &args.base) {
        (Some(over), _) => parent_dir(over),
        (None, Some(base)) => parent_dir(base),
        (None, None) => PathBuf::from("."),
    };
    let anchor_dir = anchor_dir
        .canonicalize()
        .with_context(|| format!("resolving config directory {}", anchor_dir.display()))?;

    let overlay = load_override(&anchor_dir, args.override_file.as_deref())?;
    tracing::debug!(base = ?args.base, anchor = %anchor_dir.display(), "merging configuration layers");

    let effective = effective_config(&base, &overlay, &anchor_dir)?;
    let rendered = render(&effective, args.format)?;

    match args.output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("writing effective config to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
