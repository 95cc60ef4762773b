//! Shell adapter: run one command line through the platform shell.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};
use wait_timeout::ChildExt;

use crate::core::types::Outcome;

#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub workdir: PathBuf,
    /// `None` waits for the child indefinitely.
    pub timeout: Option<Duration>,
}

pub trait Shell {
    /// Run the command to completion. `Err` means the child never started.
    fn invoke(&self, request: &Invocation) -> Result<Outcome>;
}

/// `sh -c` on Unix, `cmd /C` on Windows, with inherited standard streams.
pub struct SystemShell;

impl SystemShell {
    fn command(line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl Shell for SystemShell {
    #[instrument(skip_all, fields(workdir = %request.workdir.display()))]
    fn invoke(&self, request: &Invocation) -> Result<Outcome> {
        let mut child = Self::command(&request.command)
            .current_dir(&request.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("spawn shell for {:?}", request.command))?;

        debug!(pid = child.id(), "child spawned");

        let status = match request.timeout {
            None => child.wait().context("wait for command")?,
            Some(timeout) => match child.wait_timeout(timeout).context("wait for command")? {
                Some(status) => status,
                None => {
                    warn!(timeout_secs = timeout.as_secs(), "command timed out, killing");
                    child.kill().context("kill command")?;
                    child.wait().context("wait command after kill")?;
                    return Ok(Outcome::TimedOut);
                }
            },
        };

        debug!(exit_code = ?status.code(), "command finished");
        Ok(outcome_from_status(status))
    }
}

fn outcome_from_status(status: ExitStatus) -> Outcome {
    match status.code() {
        Some(code) => Outcome::Exited { code },
        None => Outcome::Signaled,
    }
}
