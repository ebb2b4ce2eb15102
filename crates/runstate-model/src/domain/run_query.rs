use std::collections::BTreeMap;

use serde::Serialize;

use super::{RunInfo, RunStatus, StatusGroup};

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1000;

/// Filtering and pagination over a list of runs.
#[derive(Debug, Clone)]
pub struct RunQuery {
    pub group: Option<StatusGroup>,
    pub status: Option<RunStatus>,
    pub limit: usize,
    pub offset: usize,
}

/// Result of a paginated run query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl RunQuery {
    pub fn new() -> Self {
        Self {
            group: None,
            status: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    pub fn with_group(mut self, group: StatusGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_status(mut self, status: RunStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_LIMIT);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns `true` if `run` passes every filter of the query.
    pub fn matches(&self, run: &RunInfo) -> bool {
        self.group.is_none_or(|g| g.members().contains(run.status))
            && self.status.is_none_or(|s| s == run.status)
    }

    /// Apply filters, then pagination.
    ///
    /// `total` counts matches *before* pagination. Input order is preserved.
    pub fn apply(&self, runs: &[RunInfo]) -> RunPage<RunInfo> {
        let filtered: Vec<&RunInfo> = runs.iter().filter(|run| self.matches(run)).collect();
        let total = filtered.len();

        let items = filtered
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .cloned()
            .collect();

        RunPage { items, total }
    }

    /// Default run listing: every unfinished run, or the most recently submitted
    /// finished run when nothing is in flight.
    pub fn default_listing(runs: &[RunInfo]) -> Vec<RunInfo> {
        let unfinished: Vec<RunInfo> = runs
            .iter()
            .filter(|run| run.status.is_unfinished())
            .cloned()
            .collect();
        if !unfinished.is_empty() {
            return unfinished;
        }

        runs.iter()
            .filter(|run| run.status.is_finished())
            .max_by_key(|run| run.submitted_at)
            .cloned()
            .into_iter()
            .collect()
    }
}

impl Default for RunQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate run counts for summary displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub unfinished: usize,
    pub finished: usize,
    pub by_status: BTreeMap<RunStatus, usize>,
}

impl StatusCounts {
    pub fn tally(runs: &[RunInfo]) -> Self {
        runs.iter().fold(Self::default(), |mut counts, run| {
            if run.status.is_finished() {
                counts.finished += 1;
            } else {
                counts.unfinished += 1;
            }
            *counts.by_status.entry(run.status).or_default() += 1;
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.unfinished + self.finished
    }
}
