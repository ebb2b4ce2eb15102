use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::logger::{config::LoggerConfig, error::LoggerError};

pub(super) fn filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level).map_err(|_| LoggerError::InvalidLogLevel(level.to_string()))
}

pub(super) fn init_text(filter: EnvFilter, cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let layer = fmt::layer()
        .with_ansi(cfg.use_color)
        .with_target(cfg.with_targets)
        .with_timer(local_timer());
    install(tracing_subscriber::registry().with(filter).with(layer))
}

pub(super) fn init_json(filter: EnvFilter, cfg: &LoggerConfig) -> Result<(), LoggerError> {
    let layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(local_timer());
    install(tracing_subscriber::registry().with(filter).with(layer))
}

#[cfg(all(target_os = "linux", feature = "journald"))]
pub(super) fn init_journald(filter: EnvFilter) -> Result<(), LoggerError> {
    let layer = tracing_journald::layer()
        .map_err(|e| LoggerError::InitializationFailed(format!("journald: {e}")))?;
    install(tracing_subscriber::registry().with(filter).with(layer))
}

#[cfg(not(all(target_os = "linux", feature = "journald")))]
pub(super) fn init_journald(_filter: EnvFilter) -> Result<(), LoggerError> {
    Err(LoggerError::JournaldNotSupported)
}

// Local offset lookup fails on multi-threaded unix processes; fall back to UTC.
fn local_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn install<S>(subscriber: S) -> Result<(), LoggerError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|e| {
        let msg = e.to_string();
        if msg.contains("SetGlobalDefaultError") || msg.contains("global default") {
            LoggerError::AlreadyInitialized
        } else {
            LoggerError::InitializationFailed(msg)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_directives() {
        assert!(filter("info").is_ok());
        assert!(filter("runstate_model=debug,warn").is_ok());
    }

    #[test]
    fn filter_rejects_unknown_level() {
        assert_eq!(
            filter("runstate=loud").unwrap_err(),
            LoggerError::InvalidLogLevel("runstate=loud".to_string())
        );
    }

    #[cfg(not(all(target_os = "linux", feature = "journald")))]
    #[test]
    fn journald_without_feature_is_unsupported() {
        let cfg = LoggerConfig {
            format: crate::LoggerFormat::Journald,
            ..LoggerConfig::default()
        };
        assert_eq!(crate::logger_init(&cfg), Err(LoggerError::JournaldNotSupported));
    }

    #[test]
    fn init_rejects_bad_level_before_installing() {
        let cfg = LoggerConfig {
            level: "runstate=loud".to_string(),
            ..LoggerConfig::default()
        };
        assert_eq!(
            crate::logger_init(&cfg),
            Err(LoggerError::InvalidLogLevel("runstate=loud".to_string()))
        );
    }
}
