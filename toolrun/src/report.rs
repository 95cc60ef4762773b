//! Failure summary printed after the loop when requested.

use crate::run::RunReport;

/// `summary: ran=N failed=F`, then one line per failed tool.
pub fn render_summary(report: &RunReport) -> Vec<String> {
    let failures: Vec<_> = report.failures().collect();
    let mut lines = Vec::with_capacity(failures.len() + 1);
    lines.push(format!(
        "summary: ran={} failed={}",
        report.tools.len(),
        failures.len()
    ));
    for tool in failures {
        lines.push(format!(
            "summary: failed {} ({})",
            tool.name,
            tool.outcome.describe()
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Outcome;
    use crate::run::ToolReport;

    fn tool(name: &str, outcome: Outcome) -> ToolReport {
        ToolReport {
            name: name.to_string(),
            command: format!("{name} --check"),
            percent: 0,
            outcome,
            duration_ms: 1,
        }
    }

    #[test]
    fn lists_failures_in_execution_order() {
        let report = RunReport {
            tools: vec![
                tool("pylint", Outcome::Exited { code: 16 }),
                tool("yapf", Outcome::Exited { code: 0 }),
                tool("cppcheck", Outcome::TimedOut),
                tool(
                    "rg",
                    Outcome::SpawnFailed {
                        message: "spawn shell".to_string(),
                    },
                ),
            ],
        };
        assert_eq!(
            render_summary(&report),
            vec![
                "summary: ran=4 failed=3",
                "summary: failed pylint (exit 16)",
                "summary: failed cppcheck (timed out)",
                "summary: failed rg (spawn failed: spawn shell)",
            ]
        );
    }

    #[test]
    fn clean_run_has_single_line() {
        let report = RunReport {
            tools: vec![tool("rg", Outcome::Exited { code: 0 })],
        };
        assert_eq!(render_summary(&report), vec!["summary: ran=1 failed=0"]);
    }
}
