//! Typed configuration schema
//!
//! One struct per namespace, with open-ended extra keys flattened into a
//! generic map so options this crate does not model still survive the merge
//! untouched. Wire casing is camelCase to match the build tool's files, and
//! every optional field skips serialization when unset so an absent override
//! field never clobbers a base value with null.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level configuration: the `test` namespace plus whatever other
/// namespaces the build-tool config carries (plugins, aliases, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<TestConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options recognized by the external test-execution engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    /// Ordered result-reporting formats the engine should emit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporters: Option<Vec<String>>,

    /// Reporter id → destination path (e.g. `junit` → an XML report file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageConfig>,

    /// Runtime emulation mode tests execute under (e.g. `jsdom`, `node`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Glob patterns the engine must not treat as test files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Base directory for resolving relative paths elsewhere in the config.
    /// May be a plain path or a `file://` URL before resolution; always an
    /// absolute path in the effective configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Coverage instrumentation options, forwarded to the external backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageConfig {
    /// Instrumentation backend that computes coverage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Ordered output formats for coverage results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<Vec<String>>,

    /// Destination directory for coverage artifacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports_directory: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
