use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ModelError, taxonomy};

/// Lifecycle state of a run, as reported by the orchestration layer.
///
/// Variants are declared in lifecycle order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Run was accepted and waits for scheduling.
    Submitted,
    /// Compute is being provisioned for the run.
    Provisioning,
    /// Container image is being pulled.
    Pulling,
    /// Run waits for capacity or a retry.
    Pending,
    /// Run is executing.
    Running,
    /// Run is being stopped.
    Terminating,
    /// Run was stopped.
    Terminated,
    /// Run was aborted without graceful shutdown.
    Aborted,
    /// Run finished with an error.
    Failed,
    /// Run finished successfully.
    Done,
}

impl RunStatus {
    /// Every status of the domain, in lifecycle order.
    pub const ALL: [RunStatus; 10] = [
        RunStatus::Submitted,
        RunStatus::Provisioning,
        RunStatus::Pulling,
        RunStatus::Pending,
        RunStatus::Running,
        RunStatus::Terminating,
        RunStatus::Terminated,
        RunStatus::Aborted,
        RunStatus::Failed,
        RunStatus::Done,
    ];

    /// Wire name of the status (e.g. `"running"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Submitted => "submitted",
            RunStatus::Provisioning => "provisioning",
            RunStatus::Pulling => "pulling",
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Terminating => "terminating",
            RunStatus::Terminated => "terminated",
            RunStatus::Aborted => "aborted",
            RunStatus::Failed => "failed",
            RunStatus::Done => "done",
        }
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Returns `true` if the run reached a terminal outcome.
    pub const fn is_finished(&self) -> bool {
        taxonomy::TERMINAL.contains(*self)
    }

    /// Returns `true` if the run is still progressing toward a terminal outcome.
    pub const fn is_unfinished(&self) -> bool {
        taxonomy::UNFINISHED.contains(*self)
    }

    /// Returns `true` if the run can still be stopped or aborted.
    pub const fn is_interruptible(&self) -> bool {
        taxonomy::INTERRUPTIBLE.contains(*self)
    }

    /// Returns `true` while the job is still being placed (not ready to attach).
    pub const fn is_provisioning(&self) -> bool {
        matches!(
            self,
            RunStatus::Submitted | RunStatus::Provisioning | RunStatus::Pulling
        )
    }

    /// Process exit code reported for a run in this status: `0` only for `done`.
    pub const fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Done => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts exactly the wire names serde accepts; case or whitespace variants are
/// reported as [`ModelError::UnknownStatus`].
impl FromStr for RunStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_states() {
        assert!(RunStatus::Done.is_finished());
        assert!(RunStatus::Failed.is_finished());
        assert!(RunStatus::Terminated.is_finished());
        assert!(RunStatus::Aborted.is_finished());

        assert!(!RunStatus::Running.is_finished());
        assert!(!RunStatus::Terminating.is_finished());
    }

    #[test]
    fn unfinished_and_interruptible_states() {
        assert!(RunStatus::Submitted.is_unfinished());
        assert!(RunStatus::Terminating.is_unfinished());
        assert!(!RunStatus::Terminating.is_interruptible());
        assert!(RunStatus::Pulling.is_interruptible());
        assert!(!RunStatus::Done.is_interruptible());
    }

    #[test]
    fn provisioning_states() {
        assert!(RunStatus::Submitted.is_provisioning());
        assert!(RunStatus::Provisioning.is_provisioning());
        assert!(RunStatus::Pulling.is_provisioning());
        assert!(!RunStatus::Pending.is_provisioning());
        assert!(!RunStatus::Running.is_provisioning());
    }

    #[test]
    fn exit_code_is_zero_only_for_done() {
        assert_eq!(RunStatus::Done.exit_code(), 0);
        for status in RunStatus::ALL.into_iter().filter(|s| *s != RunStatus::Done) {
            assert_eq!(status.exit_code(), 1, "{status}");
        }
    }

    #[test]
    fn parse_accepts_wire_names() {
        for status in RunStatus::ALL {
            assert_eq!(status.as_str().parse::<RunStatus>(), Ok(status));
        }
    }

    #[test]
    fn parse_matches_serde_strictness() {
        for raw in ["Running", "RUNNING", " running", "running\n"] {
            assert_eq!(
                raw.parse::<RunStatus>(),
                Err(ModelError::UnknownStatus(raw.to_string()))
            );
            let json = serde_json::to_string(raw).unwrap();
            assert!(serde_json::from_str::<RunStatus>(&json).is_err(), "{raw:?}");
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "exploded".parse::<RunStatus>().unwrap_err();
        assert_eq!(err, ModelError::UnknownStatus("exploded".to_string()));
    }

    #[test]
    fn ordering_follows_lifecycle() {
        assert!(RunStatus::Submitted < RunStatus::Running);
        assert!(RunStatus::Running < RunStatus::Done);
        let mut sorted = RunStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, RunStatus::ALL);
    }

    #[test]
    fn serde_roundtrip() {
        let status = RunStatus::Provisioning;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#""provisioning""#);

        let back: RunStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
