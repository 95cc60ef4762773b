//! Tool runner loop.
//!
//! Runs every table entry in declaration order, one at a time, from the
//! project root. A progress line is written before each tool; the tool's
//! own outcome never stops the loop.

use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::core::progress::{percent, progress_line};
use crate::core::table::CommandTable;
use crate::core::types::Outcome;
use crate::io::shell::{Invocation, Shell};

/// What happened to one tool.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToolReport {
    pub name: String,
    pub command: String,
    pub percent: u32,
    pub outcome: Outcome,
    pub duration_ms: u64,
}

/// Per-tool results in execution order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RunReport {
    pub tools: Vec<ToolReport>,
}

impl RunReport {
    pub fn failures(&self) -> impl Iterator<Item = &ToolReport> {
        self.tools.iter().filter(|tool| !tool.outcome.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub timeout: Option<Duration>,
}

/// Run every tool in `table` from `root`, writing progress lines to `out`.
///
/// Only a failed write to `out` is an error.
#[instrument(skip_all, fields(tools = table.len(), root = %root.display()))]
pub fn run_all<S: Shell, W: Write>(
    table: &CommandTable,
    root: &Path,
    shell: &S,
    options: RunOptions,
    out: &mut W,
) -> Result<RunReport> {
    let total = table.len();
    let mut report = RunReport::default();
    if total == 0 {
        info!("command table is empty, nothing to run");
        return Ok(report);
    }

    for (offset, entry) in table.iter().enumerate() {
        let index = offset + 1;
        let (Some(pct), Some(line)) = (
            percent(index, total),
            progress_line(index, total, &entry.name),
        ) else {
            continue;
        };
        writeln!(out, "{line}").context("write progress line")?;
        out.flush().context("flush progress line")?;

        let request = Invocation {
            command: entry.command.clone(),
            workdir: root.to_path_buf(),
            timeout: options.timeout,
        };
        debug!(tool = %entry.name, command = %entry.command, "invoking tool");
        let started = Instant::now();
        let outcome = match shell.invoke(&request) {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = format!("{err:#}");
                warn!(tool = %entry.name, err = %message, "tool failed to start");
                Outcome::SpawnFailed { message }
            }
        };
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(tool = %entry.name, outcome = ?outcome, duration_ms, "tool finished");

        report.tools.push(ToolReport {
            name: entry.name.clone(),
            command: entry.command.clone(),
            percent: pct,
            outcome,
            duration_ms,
        });
    }

    info!(
        ran = report.tools.len(),
        failed = report.failures().count(),
        "all tools finished"
    );
    Ok(report)
}
