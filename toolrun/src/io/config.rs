//! Runner configuration stored in a TOML file (conventionally `scripts/tools.toml`).

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::table::{CommandTable, ToolEntry, default_table};

/// Top-level config file.
///
/// Missing fields take defaults. Without a `[[tools]]` array the built-in
/// table is used; `tools = []` selects an empty table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub runner: RunnerSettings,
    pub tools: Option<Vec<ToolEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerSettings {
    /// Print a failure summary after the last tool.
    pub summary: bool,

    /// Exit with `TOOL_FAILED` when any tool did not succeed.
    pub strict: bool,

    /// Per-tool wall-clock limit in seconds. `0` disables the limit.
    pub timeout_secs: u64,
}

impl RunnerSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Config {
    pub fn parse_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents).context("parse config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.table().map(|_| ())
    }

    pub fn table(&self) -> Result<CommandTable> {
        match &self.tools {
            None => Ok(default_table()),
            Some(entries) => CommandTable::new(entries.clone()),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `Config::default()`.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Config::parse_str(&contents).with_context(|| format!("load {}", path.display()))
}
