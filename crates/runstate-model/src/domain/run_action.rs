use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ModelError, RunStatus, StatusGroup};

/// User-facing action on a run, gated by the run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunAction {
    /// Remove the run record.
    Delete,
    /// Request graceful termination.
    Stop,
    /// Terminate immediately, skipping graceful shutdown.
    Abort,
}

impl RunAction {
    pub const ALL: [RunAction; 3] = [RunAction::Delete, RunAction::Stop, RunAction::Abort];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RunAction::Delete => "delete",
            RunAction::Stop => "stop",
            RunAction::Abort => "abort",
        }
    }

    /// Group of statuses in which the action is valid.
    pub const fn group(&self) -> StatusGroup {
        match self {
            RunAction::Delete => StatusGroup::ForDeleting,
            RunAction::Stop => StatusGroup::ForStopping,
            RunAction::Abort => StatusGroup::ForAborting,
        }
    }

    /// Returns `true` if the action control should be enabled for a run in `status`.
    pub const fn allowed_for(&self, status: RunStatus) -> bool {
        self.group().members().contains(status)
    }

    /// Actions available for a run in `status`.
    pub fn enabled_for(status: RunStatus) -> Vec<RunAction> {
        RunAction::ALL
            .into_iter()
            .filter(|action| action.allowed_for(status))
            .collect()
    }
}

impl fmt::Display for RunAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete" => Ok(RunAction::Delete),
            "stop" => Ok(RunAction::Stop),
            "abort" => Ok(RunAction::Abort),
            _ => Err(ModelError::UnknownAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_can_be_stopped_or_aborted() {
        assert_eq!(
            RunAction::enabled_for(RunStatus::Running),
            vec![RunAction::Stop, RunAction::Abort]
        );
    }

    #[test]
    fn finished_can_only_be_deleted() {
        for status in [RunStatus::Done, RunStatus::Failed, RunStatus::Aborted, RunStatus::Terminated] {
            assert_eq!(RunAction::enabled_for(status), vec![RunAction::Delete], "{status}");
        }
    }

    #[test]
    fn terminating_allows_nothing() {
        assert!(RunAction::enabled_for(RunStatus::Terminating).is_empty());
    }

    #[test]
    fn parse_actions() {
        assert_eq!("stop".parse::<RunAction>(), Ok(RunAction::Stop));
        assert_eq!(
            "Stop".parse::<RunAction>(),
            Err(ModelError::UnknownAction("Stop".to_string()))
        );
        assert_eq!(
            "restart".parse::<RunAction>(),
            Err(ModelError::UnknownAction("restart".to_string()))
        );
    }
}
