use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::{RunId, RunStatus};

/// Summary of a run as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInfo {
    /// Unique run identifier.
    pub id: RunId,
    /// Human-readable run name.
    pub name: String,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// When the run was submitted.
    #[serde(with = "time_serde")]
    pub submitted_at: SystemTime,
}

impl RunInfo {
    pub fn new(
        id: impl Into<RunId>,
        name: impl Into<String>,
        status: RunStatus,
        submitted_at: SystemTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            submitted_at,
        }
    }
}

mod time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let since_epoch = time
            .duration_since(UNIX_EPOCH)
            .map_err(serde::ser::Error::custom)?;
        since_epoch.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + std::time::Duration::from_secs(secs))
    }
}
