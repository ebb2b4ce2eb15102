//! Canonical status sets and membership queries.
//!
//! Every [`StatusGroup`] resolves to one of three sets defined here. `UNFINISHED` is the
//! complement of `TERMINAL`, so every status is either finished or unfinished.

use tracing::warn;

use crate::{ModelError, RunStatus, StatusGroup, StatusSet};

/// Statuses from which no further transition occurs.
pub const TERMINAL: StatusSet = StatusSet::of(&[
    RunStatus::Terminated,
    RunStatus::Aborted,
    RunStatus::Failed,
    RunStatus::Done,
]);

/// Statuses of runs still progressing toward a terminal status.
pub const UNFINISHED: StatusSet = TERMINAL.complement();

/// Statuses of runs that can still be stopped or aborted.
///
/// `terminating` is excluded: a stop is already in flight.
pub const INTERRUPTIBLE: StatusSet = StatusSet::of(&[
    RunStatus::Submitted,
    RunStatus::Provisioning,
    RunStatus::Pulling,
    RunStatus::Pending,
    RunStatus::Running,
]);

const _: () = assert!(INTERRUPTIBLE.is_subset(UNFINISHED));
const _: () = assert!(TERMINAL.is_disjoint(UNFINISHED));

/// Returns `true` if `status` belongs to `group`.
pub const fn is_member(group: StatusGroup, status: RunStatus) -> bool {
    group.members().contains(status)
}

/// Members of `group`.
pub const fn members_of(group: StatusGroup) -> StatusSet {
    group.members()
}

/// Membership test for a status string reported by an external layer.
///
/// A status outside the domain points at an upstream inconsistency; it is logged and
/// returned as [`ModelError::UnknownStatus`].
pub fn is_member_str(group: StatusGroup, raw: &str) -> Result<bool, ModelError> {
    let status = raw
        .parse::<RunStatus>()
        .inspect_err(|e| warn!(group = group.as_str(), status = raw, "{e}"))?;
    Ok(is_member(group, status))
}

/// All groups `status` belongs to, aliases included.
pub fn groups_of(status: RunStatus) -> Vec<StatusGroup> {
    StatusGroup::ALL
        .into_iter()
        .filter(|group| is_member(*group, status))
        .collect()
}
