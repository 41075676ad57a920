//! Configuration loading, merging, and resolution
//!
//! Combines a build-tool base configuration with a test-specific override
//! layer (override wins on shared leaves, namespaces merge key-by-key) and
//! resolves the root path before the result reaches the external engine.

pub mod defaults;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod schema;

pub use loader::{load_config, load_override};
pub use merge::merge_values;
pub use paths::{resolve_root, PathError};
pub use schema::{Config, CoverageConfig, TestConfig};

use anyhow::{Context, Result};
use std::path::Path;

/// Produce the effective configuration: merge the layers, then resolve
/// `test.root` against the directory the configuration was loaded from.
///
/// One-shot and stateless; the result is immutable for the rest of the
/// process and passed by reference to whatever consumes it.
pub fn effective_config(base: &Config, overlay: &Config, config_dir: &Path) -> Result<Config> {
    let mut merged = base.merged_with(overlay)?;

    if let Some(test) = merged.test.as_mut() {
        if let Some(raw) = test.root.as_deref() {
            let resolved = resolve_root(raw, config_dir)
                .with_context(|| format!("resolving test root '{raw}'"))?;
            test.root = Some(resolved.to_string_lossy().into_owned());
        }
    }

    Ok(merged)
}
