//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod origin;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LoggerConfig, DEFAULT_LOG_PATH};
pub use error::{LoggerError, Result};
pub use formatter::RecordFormatter;
pub use log_level::LogLevel;
pub use log_record::{Destination, LogRecord};
pub use logger::{global, init_global, Logger, LoggerBuilder, PipelineState};
pub use metrics::LoggerMetrics;
pub use origin::Origin;
pub use timestamp::TimestampFormat;
