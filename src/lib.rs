//! # Game Logger
//!
//! A minimal asynchronous logger for latency-sensitive applications such as
//! games. Log calls render their line on the calling thread and hand it to a
//! single background worker, which owns all console and file I/O.
//!
//! ## Features
//!
//! - **Non-blocking**: callers only format and enqueue
//! - **Ordered**: one consumer writes records in exact enqueue order
//! - **Source aware**: every record names its file, line and function
//! - **Optional file sink**: timestamped, uncolored, append-only
//!
//! ```
//! use game_logger::{ffatal, info, Logger, LogLevel};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::builder()
//!     .min_level(LogLevel::Info)
//!     .file_path(dir.path().join("game.log"))
//!     .file_logging(true)
//!     .build();
//!
//! info!(logger, "level {} loaded", 3);
//! ffatal!(logger, "save file corrupted: {}", "slot 2");
//! logger.shutdown();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        global, init_global, Appender, Destination, LogLevel, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Origin, PipelineState, RecordFormatter, Result,
        TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    global, init_global, Appender, Destination, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Origin, PipelineState, RecordFormatter, Result,
    TimestampFormat, DEFAULT_LOG_PATH,
};

/// Lowest level the logging macros compile in.
///
/// Builds without debug assertions keep only Error and Fatal unless the
/// `release-all-levels` feature is enabled; the runtime minimum level still
/// applies on top of this floor.
pub const STATIC_MIN_LEVEL: LogLevel = if cfg!(any(debug_assertions, feature = "release-all-levels")) {
    LogLevel::Trace
} else {
    LogLevel::Error
};
