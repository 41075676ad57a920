//! testconf: resolve the effective test-runner configuration
//!
//! This tool merges a build-tool base configuration with test-specific
//! overrides and emits the effective configuration consumed by an external
//! test-execution engine.

use anyhow::Result;

fn main() -> Result<()> {
    testconf::cli::run()
}
