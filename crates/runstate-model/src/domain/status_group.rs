use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ModelError, StatusSet, taxonomy};

/// Named group of run statuses sharing one predicate.
///
/// Several names exist for the same predicate so that call sites can read naturally
/// (`ForDeleting` next to a delete button, `Inactive` in a filter). Aliases always
/// resolve to the same underlying set; see [`StatusGroup::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusGroup {
    /// Run may be deleted.
    ForDeleting,
    /// Run is not actively executing.
    Inactive,
    /// Run may be stopped.
    ForStopping,
    /// Run may be aborted.
    ForAborting,
    /// Run has not reached a terminal outcome.
    Unfinished,
    /// Legacy name of [`StatusGroup::Finished`].
    FinishedJobs,
    /// Run has reached a terminal outcome.
    Finished,
}

impl StatusGroup {
    pub const ALL: [StatusGroup; 7] = [
        StatusGroup::ForDeleting,
        StatusGroup::Inactive,
        StatusGroup::ForStopping,
        StatusGroup::ForAborting,
        StatusGroup::Unfinished,
        StatusGroup::FinishedJobs,
        StatusGroup::Finished,
    ];

    /// Wire name of the group (e.g. `"forDeleting"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusGroup::ForDeleting => "forDeleting",
            StatusGroup::Inactive => "inactive",
            StatusGroup::ForStopping => "forStopping",
            StatusGroup::ForAborting => "forAborting",
            StatusGroup::Unfinished => "unfinished",
            StatusGroup::FinishedJobs => "finishedJobs",
            StatusGroup::Finished => "finished",
        }
    }

    /// The group whose set this name is an alias of.
    ///
    /// - `Finished`: `FinishedJobs`, `ForDeleting`, `Inactive`
    /// - `ForStopping`: `ForAborting`
    /// - `Unfinished`: itself
    pub const fn canonical(&self) -> StatusGroup {
        match self {
            StatusGroup::Finished
            | StatusGroup::FinishedJobs
            | StatusGroup::ForDeleting
            | StatusGroup::Inactive => StatusGroup::Finished,
            StatusGroup::ForStopping | StatusGroup::ForAborting => StatusGroup::ForStopping,
            StatusGroup::Unfinished => StatusGroup::Unfinished,
        }
    }

    /// Statuses for which the group predicate holds.
    pub const fn members(&self) -> StatusSet {
        match self.canonical() {
            StatusGroup::ForStopping => taxonomy::INTERRUPTIBLE,
            StatusGroup::Unfinished => taxonomy::UNFINISHED,
            _ => taxonomy::TERMINAL,
        }
    }
}

impl fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusGroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusGroup::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| ModelError::UnknownGroup(s.to_string()))
    }
}
