use std::io::IsTerminal;

use crate::logger::{error::LoggerError, format::LoggerFormat};

pub const ENV_LOG_FORMAT: &str = "RUNSTATE_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "RUNSTATE_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl LoggerConfig {
    /// Defaults overridden by `RUNSTATE_LOG_FORMAT` and `RUNSTATE_LOG_LEVEL`.
    pub fn from_env() -> Result<Self, LoggerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            let level = level.trim();
            if level.is_empty() {
                return Err(LoggerError::InvalidLogLevel(level.to_string()));
            }
            cfg.level = level.to_string();
        }
        cfg.use_color &= cfg.format.supports_color();
        Ok(cfg)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::default(),
            level: "info".to_string(),
            with_targets: true,
            use_color,
        }
    }
}
