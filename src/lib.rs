//! testconf: resolve the effective test-runner configuration
//!
//! Merges a build-tool base configuration with a test-specific override layer
//! into one effective configuration object, ready to hand to an external
//! test-execution engine. The merge is right-biased and recursive: nested
//! namespaces combine key-by-key, leaf values from the override replace the
//! base wholesale.

pub mod cli;
pub mod config;

pub use config::schema::{Config, CoverageConfig, TestConfig};
pub use config::{effective_config, merge::merge_values};
