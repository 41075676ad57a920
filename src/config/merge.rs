//! Recursive configuration merge
//!
//! Right-biased, key-wise union: when both sides define a nested namespace
//! the namespaces merge key-by-key; when either side's value is a leaf
//! (list, string, or scalar) the override replaces the base wholesale. Lists
//! are never concatenated here; extending a default set is the override
//! author's job (see [`crate::config::defaults::exclude_with`]).

use anyhow::{Context, Result};
use serde_json::Value;

use super::schema::Config;

/// Merge two configuration values. Pure; neither input is mutated.
///
/// A `Null` override is treated as "not set" and keeps the base value,
/// mirroring how an absent key behaves.
pub fn merge_values(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, overlay_val) in overlay_map {
                match merged.get(key) {
                    Some(base_val) => {
                        let combined = merge_values(base_val, overlay_val);
                        merged.insert(key.clone(), combined);
                    }
                    None => {
                        merged.insert(key.clone(), overlay_val.clone());
                    }
                }
            }
            Value::Object(merged)
        }
        (base, Value::Null) => base.clone(),
        (_, overlay) => overlay.clone(),
    }
}

impl Config {
    /// Produce the merged configuration, with `overlay` taking precedence.
    ///
    /// Implemented once generically: both sides serialize to a JSON value,
    /// [`merge_values`] combines them, and the union deserializes back into
    /// the typed schema. Unknown keys ride along in the flattened extras.
    pub fn merged_with(&self, overlay: &Config) -> Result<Config> {
        let base = serde_json::to_value(self).context("serializing base configuration")?;
        let over = serde_json::to_value(overlay).context("serializing override configuration")?;
        let merged = merge_values(&base, &over);
        serde_json::from_value(merged).context("materializing merged configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{CoverageConfig, TestConfig};
    use serde_json::json;
    use similar_asserts::assert_eq;

    fn config(v: serde_json::Value) -> Config {
        serde_json::from_value(v).expect("test config")
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = config(json!({
            "test": {
                "environment": "node",
                "reporters": ["default"],
                "exclude": ["**/node_modules/**"]
            }
        }));

        let merged = base.merged_with(&Config::default()).expect("merge");
        assert_eq!(merged, base);
    }

    #[test]
    fn test_override_wins_on_shared_leaf() {
        let base = config(json!({ "test": { "environment": "node" } }));
        let over = config(json!({ "test": { "environment": "jsdom" } }));

        let merged = base.merged_with(&over).expect("merge");
        assert_eq!(merged.test.expect("test").environment.as_deref(), Some("jsdom"));
    }

    #[test]
    fn test_shared_namespace_unions_keys() {
        let base = config(json!({
            "test": {
                "environment": "node",
                "coverage": { "provider": "istanbul", "reportsDirectory": "./cov" }
            }
        }));
        let over = config(json!({
            "test": {
                "reporters": ["default", "junit"],
                "coverage": { "provider": "v8" }
            }
        }));

        let merged = base.merged_with(&over).expect("merge");
        let test = merged.test.expect("test");
        // Keys from both sides survive; conflicts resolve toward the override.
        assert_eq!(test.environment.as_deref(), Some("node"));
        assert_eq!(test.reporters, Some(vec!["default".to_string(), "junit".to_string()]));
        let coverage = test.coverage.expect("coverage");
        assert_eq!(coverage.provider.as_deref(), Some("v8"));
        assert_eq!(coverage.reports_directory.as_deref(), Some("./cov"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let cfg = config(json!({
            "plugins": ["vue"],
            "test": {
                "environment": "jsdom",
                "outputFile": { "junit": "out.xml" },
                "coverage": { "reporter": ["text", "lcov"] }
            }
        }));

        let merged = cfg.merged_with(&cfg).expect("merge");
        assert_eq!(merged, cfg);
    }

    #[test]
    fn test_list_leaves_are_replaced_not_concatenated() {
        let base = config(json!({ "test": { "reporters": ["default", "html"] } }));
        let over = config(json!({ "test": { "reporters": ["junit"] } }));

        let merged = base.merged_with(&over).expect("merge");
        assert_eq!(merged.test.expect("test").reporters, Some(vec!["junit".to_string()]));
    }

    #[test]
    fn test_null_override_keeps_base_value() {
        let base = json!({ "test": { "environment": "node" } });
        let over = json!({ "test": { "environment": null } });

        let merged = merge_values(&base, &over);
        assert_eq!(merged, json!({ "test": { "environment": "node" } }));
    }

    #[test]
    fn test_unknown_namespaces_merge_recursively() {
        let base = json!({ "resolve": { "alias": { "@": "./src" }, "dedupe": ["vue"] } });
        let over = json!({ "resolve": { "alias": { "~": "./lib" } } });

        let merged = merge_values(&base, &over);
        assert_eq!(
            merged,
            json!({ "resolve": { "alias": { "@": "./src", "~": "./lib" }, "dedupe": ["vue"] } })
        );
    }

    #[test]
    fn test_inputs_not_mutated() {
        let base = json!({ "test": { "environment": "node" } });
        let over = json!({ "test": { "environment": "jsdom" } });
        let base_before = base.clone();
        let over_before = over.clone();

        let _ = merge_values(&base, &over);
        assert_eq!(base, base_before);
        assert_eq!(over, over_before);
    }

    #[test]
    fn test_typed_defaults_merge_cleanly() {
        let base = Config {
            test: Some(TestConfig {
                environment: Some("node".to_string()),
                ..TestConfig::default()
            }),
            ..Config::default()
        };
        let over = Config {
            test: Some(TestConfig {
                coverage: Some(CoverageConfig {
                    provider: Some("v8".to_string()),
                    ..CoverageConfig::default()
                }),
                ..TestConfig::default()
            }),
            ..Config::default()
        };

        let merged = base.merged_with(&over).expect("merge");
        let test = merged.test.expect("test");
        assert_eq!(test.environment.as_deref(), Some("node"));
        assert_eq!(test.coverage.expect("coverage").provider.as_deref(), Some("v8"));
    }
}
