use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown run status: {0}")]
    UnknownStatus(String),
    #[error("unknown status group: {0}")]
    UnknownGroup(String),
    #[error("unknown run action: {0} (expected: delete|stop|abort)")]
    UnknownAction(String),
}
