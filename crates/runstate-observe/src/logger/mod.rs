mod config;
mod error;
mod format;
mod log;

pub use config::{ENV_LOG_FORMAT, ENV_LOG_LEVEL, LoggerConfig};
pub use error::LoggerError;
pub use format::LoggerFormat;

/// Install the global `tracing` subscriber described by `cfg`.
///
/// The level directive is validated before any format-specific setup, so a bad
/// `RUNSTATE_LOG_LEVEL` is reported the same way for every format.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let filter = log::filter(&cfg.level)?;
    match cfg.format {
        LoggerFormat::Text => log::init_text(filter, cfg),
        LoggerFormat::Json => log::init_json(filter, cfg),
        LoggerFormat::Journald => log::init_journald(filter),
    }
}
