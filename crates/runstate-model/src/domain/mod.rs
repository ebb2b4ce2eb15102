mod run_status;
pub use run_status::RunStatus;

mod status_set;
pub use status_set::StatusSet;

mod status_group;
pub use status_group::StatusGroup;

mod run_action;
pub use run_action::RunAction;

mod run_info;
pub use run_info::RunInfo;

mod run_query;
pub use run_query::{RunPage, RunQuery, StatusCounts};

/// Opaque identifier of a run as assigned by the orchestration layer.
pub type RunId = String;
