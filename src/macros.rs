//! Logging macros with call-site capture.
//!
//! Every macro takes the logger first, then a `format!`-style template.
//! The file, line and enclosing function are captured automatically.
//!
//! Console macros: [`trace!`], [`debug!`], [`info!`], [`warn!`], [`error!`],
//! [`fatal!`]. File macros: [`ftrace!`], [`fdebug!`], [`finfo!`], [`fwarn!`],
//! [`ferror!`], [`ffatal!`].
//!
//! Levels below [`STATIC_MIN_LEVEL`](crate::STATIC_MIN_LEVEL) expand to
//! nothing observable, so Trace through Warn cost nothing in release builds.
//!
//! # Examples
//!
//! ```
//! use game_logger::prelude::*;
//! use game_logger::{info, warn};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let fps = 59.7;
//! warn!(logger, "frame rate dropped to {:.1}", fps);
//!
//! // Works through references, Arc and the global logger alike
//! info!(game_logger::global(), "player {} joined", "ada");
//!
//! logger.shutdown();
//! // The global logger is never dropped; drain it before exiting
//! game_logger::global().shutdown();
//! ```

/// Log a console record at an explicit level.
///
/// ```
/// # use game_logger::prelude::*;
/// # let logger = Logger::new();
/// use game_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __level: $crate::LogLevel = $level;
        if (__level as u8) >= ($crate::STATIC_MIN_LEVEL as u8) {
            $logger.log(__level, $crate::origin!(), format_args!($($arg)+));
        }
    }};
}

/// Log a file record at an explicit level.
///
/// Emits a Warn console record instead when file logging is disabled.
#[macro_export]
macro_rules! log_to_file {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __level: $crate::LogLevel = $level;
        if (__level as u8) >= ($crate::STATIC_MIN_LEVEL as u8) {
            $logger.log_to_file(__level, $crate::origin!(), format_args!($($arg)+));
        }
    }};
}

/// Log a trace-level console record.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level console record.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level console record.
///
/// ```
/// # use game_logger::prelude::*;
/// # let logger = Logger::new();
/// use game_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level console record.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level console record. Active in every build.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level console record. Active in every build.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! ftrace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! fdebug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! finfo {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! fwarn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level file record. Active in every build.
#[macro_export]
macro_rules! ferror {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level file record. Active in every build.
#[macro_export]
macro_rules! ffatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_to_file!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
