use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use daystep_fixture::{DEFAULT_FILE_NAME, DEFAULT_SPAN_YEARS, DEFAULT_START_UNIX_NANOS};

/// Top-level daystep configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DaystepConfig {
    /// Fixture settings.
    #[serde(default)]
    pub fixture: FixtureToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureToml {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_start_unix_nanos")]
    pub start_unix_nanos: i64,
    #[serde(default = "default_step_secs")]
    pub step_secs: i64,
    #[serde(default = "default_span_years")]
    pub span_years: u32,
}

impl Default for FixtureToml {
    fn default() -> Self {
        Self {
            output: default_output(),
            start_unix_nanos: default_start_unix_nanos(),
            step_secs: default_step_secs(),
            span_years: default_span_years(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}
fn default_start_unix_nanos() -> i64 {
    // The reference start is 12_345_678, well inside i64.
    DEFAULT_START_UNIX_NANOS as i64
}
fn default_step_secs() -> i64 {
    daystep_calendar::SECONDS_PER_DAY
}
fn default_span_years() -> u32 {
    DEFAULT_SPAN_YEARS
}

/// Loads the configuration file, or the built-in defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<DaystepConfig> {
    let Some(path) = path else {
        return Ok(DaystepConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
