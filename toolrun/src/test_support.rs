//! Test-only helpers: a recording shell and a table builder.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};

use crate::core::table::{CommandTable, ToolEntry};
use crate::core::types::Outcome;
use crate::io::shell::{Invocation, Shell};

/// Build a table from `(name, command)` pairs.
///
/// Panics on invalid input; tests only.
pub fn table(pairs: &[(&str, &str)]) -> CommandTable {
    let entries = pairs
        .iter()
        .map(|(name, command)| ToolEntry::new(*name, *command))
        .collect();
    CommandTable::new(entries).expect("valid test table")
}

/// Shell that records every invocation and replays scripted outcomes.
///
/// Once the script runs out, every invocation exits 0. A scripted `Err`
/// simulates a spawn failure.
#[derive(Default)]
pub struct RecordingShell {
    calls: RefCell<Vec<Invocation>>,
    script: RefCell<VecDeque<std::result::Result<Outcome, String>>>,
}

impl RecordingShell {
    pub fn with_outcomes(outcomes: Vec<std::result::Result<Outcome, String>>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            script: RefCell::new(outcomes.into()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.command.clone())
            .collect()
    }

    pub fn workdirs(&self) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.workdir.clone())
            .collect()
    }

    pub fn timeouts(&self) -> Vec<Option<Duration>> {
        self.calls.borrow().iter().map(|call| call.timeout).collect()
    }
}

impl Shell for RecordingShell {
    fn invoke(&self, request: &Invocation) -> Result<Outcome> {
        self.calls.borrow_mut().push(request.clone());
        match self.script.borrow_mut().pop_front() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Ok(Outcome::Exited { code: 0 }),
        }
    }
}
