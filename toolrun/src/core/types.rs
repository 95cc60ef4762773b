use serde::{Deserialize, Serialize};

/// How a single tool invocation ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Exited { code: i32 },
    Signaled,
    TimedOut,
    SpawnFailed { message: String },
}

impl Outcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, Outcome::Exited { code: 0 })
    }

    /// Short human-readable reason, used in the failure summary.
    pub fn describe(&self) -> String {
        match self {
            Outcome::Exited { code } => format!("exit {code}"),
            Outcome::Signaled => "signal".to_string(),
            Outcome::TimedOut => "timed out".to_string(),
            Outcome::SpawnFailed { message } => format!("spawn failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_exit_succeeds() {
        assert!(Outcome::Exited { code: 0 }.succeeded());
        assert!(!Outcome::Exited { code: 1 }.succeeded());
        assert!(!Outcome::Signaled.succeeded());
        assert!(!Outcome::TimedOut.succeeded());
        assert!(
            !Outcome::SpawnFailed {
                message: "no sh".to_string()
            }
            .succeeded()
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&Outcome::Exited { code: 3 }).expect("json");
        assert_eq!(json, r#"{"kind":"exited","code":3}"#);
    }
}
