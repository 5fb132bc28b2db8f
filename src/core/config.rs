//! Logger configuration
//!
//! Everything here can also be set through [`LoggerBuilder`](super::LoggerBuilder);
//! the serde form exists so games can ship the settings in a JSON file.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File used by the file sink unless another path is configured.
pub const DEFAULT_LOG_PATH: &str = "./log.txt";

/// Startup configuration for a [`Logger`](super::Logger)
///
/// # Example
///
/// ```
/// use game_logger::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::from_json_str(r#"{ "min_level": "Warn", "file_path": "game.log" }"#)
///     .unwrap();
/// assert_eq!(config.min_level, LogLevel::Warn);
/// assert!(!config.file_logging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console records below this level are dropped before rendering
    pub min_level: LogLevel,

    /// Path opened (append mode) when file logging is enabled
    pub file_path: PathBuf,

    /// Open the file sink during construction
    pub file_logging: bool,

    /// Also print file records on the console
    pub mirror_file_to_console: bool,

    /// Apply `min_level` to file records too (they bypass it by default)
    pub gate_file_records: bool,

    /// Timestamp layout of file records
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Trace,
            file_path: PathBuf::from(DEFAULT_LOG_PATH),
            file_logging: false,
            mirror_file_to_console: false,
            gate_file_records: false,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_path.as_os_str().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "file_path must not be empty"));
        }
        if !self.timestamp_format.is_valid() {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("unsupported timestamp format {:?}", self.timestamp_format),
            ));
        }
        Ok(())
    }
}
