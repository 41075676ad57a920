//! Stock configuration values
//!
//! The engine's default exclusion globs plus the sample override layer a CI
//! setup typically applies on top of the build config. Override authors
//! extend the defaults explicitly via [`exclude_with`]; the merge itself
//! never concatenates lists.

use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::schema::{Config, CoverageConfig, TestConfig};

/// Glob patterns the engine never treats as test files.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/cypress/**",
    "**/.{idea,git,cache,output,temp}/**",
    "**/{karma,rollup,webpack,vite,vitest,jest,ava,babel,nyc,cypress,tsup,build,eslint,prettier}.config.*",
];

static DEFAULT_EXCLUDE_SET: Lazy<GlobSet> = Lazy::new(|| {
    // The stock patterns are literals known to compile.
    compile_exclude(DEFAULT_EXCLUDE.iter().map(|p| p.to_string()))
        .unwrap_or_else(|_| GlobSet::empty())
});

/// Default exclusion patterns as an owned list, ready to extend.
pub fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect()
}

/// Stock defaults plus additional patterns, in order. This is the explicit
/// "spread the defaults" construction used by override authors.
pub fn exclude_with<I, S>(extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut patterns = default_exclude();
    patterns.extend(extra.into_iter().map(Into::into));
    patterns
}

/// Compile exclusion patterns into the matcher form downstream consumers use.
pub fn compile_exclude<I, S>(patterns: I) -> Result<GlobSet, globset::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern.as_ref())?);
    }
    builder.build()
}

/// Matcher over the stock exclusion patterns.
pub fn default_exclude_set() -> &'static GlobSet {
    &DEFAULT_EXCLUDE_SET
}

/// The typical CI override layer: junit/html/json reporting, v8 coverage,
/// a DOM-emulating environment, and end-to-end suites excluded from the
/// unit-test run.
pub fn sample_override() -> Config {
    Config {
        test: Some(TestConfig {
            reporters: Some(
                ["default", "junit", "html", "json"].iter().map(|s| s.to_string()).collect(),
            ),
            output_file: Some(BTreeMap::from([(
                "junit".to_string(),
                "coverages/unit-tests.xml".to_string(),
            )])),
            coverage: Some(CoverageConfig {
                provider: Some("v8".to_string()),
                reporter: Some(["text", "json", "lcov"].iter().map(|s| s.to_string()).collect()),
                reports_directory: Some("./coverages/coverage".to_string()),
                ..CoverageConfig::default()
            }),
            environment: Some("jsdom".to_string()),
            exclude: Some(exclude_with(["e2e/**"])),
            root: Some("./".to_string()),
            ..TestConfig::default()
        }),
        ..Config::default()
    }
}
