//! Ordered command table: tool name to shell command line.

use std::collections::BTreeSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// A single tool: its display name and the shell command line that runs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolEntry {
    pub name: String,
    pub command: String,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Tools in execution order. Names are unique; order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<ToolEntry>,
}

impl CommandTable {
    pub fn new(entries: Vec<ToolEntry>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                bail!("tools[{}].name must be non-empty", index);
            }
            if entry.command.trim().is_empty() {
                bail!("tools[{}] ({}) command must be non-empty", index, entry.name);
            }
            if !seen.insert(entry.name.as_str()) {
                bail!("duplicate tool name {}", entry.name);
            }
        }
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}

const DEFAULT_TOOLS: &[(&str, &str)] = &[
    ("pylint", "pylint --max-line-length=240 -s n scripts/format.py"),
    ("yapf", "yapf --style google -i scripts/format.py"),
    (
        "cppcheck",
        "cppcheck --quiet --enable=all --inconclusive --library=posix \
         --suppress=missingIncludeSystem -I valiant/ valiant/*.hpp examples/*.cpp tests/*.cpp",
    ),
    (
        "clang-format",
        "clang-format -i valiant/*.hpp examples/*.cpp tests/*.cpp",
    ),
    ("cmake-format", "cmake-format -i CMakeLists.txt"),
    ("cmake-lint", "cmake-lint --suppress-decorations CMakeLists.txt"),
    ("rg", "rg -t cpp --vimgrep TODO"),
];

/// Built-in table used when no config overrides it.
pub fn default_table() -> CommandTable {
    CommandTable {
        entries: DEFAULT_TOOLS
            .iter()
            .map(|(name, command)| ToolEntry::new(*name, *command))
            .collect(),
    }
}
