//! Log level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, totally ordered from `Trace` to `Off`.
///
/// `Off` is only meaningful as a minimum-level filter: setting it suppresses
/// every record, and nothing is ever emitted at `Off` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Off = 6,
}

impl LogLevel {
    /// Every level that can actually be emitted, in ascending order.
    pub const EMITTABLE: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }

    /// Inverse of `level as u8`; out-of-range values clamp to `Off`.
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            5 => LogLevel::Fatal,
            _ => LogLevel::Off,
        }
    }

    /// Whether a record at this level can ever be written.
    #[inline]
    pub fn is_emittable(&self) -> bool {
        *self != LogLevel::Off
    }

    /// ANSI escape sequence that opens the console color for this level.
    ///
    /// Fatal is white text on a red background. `Off` has no color.
    pub fn ansi_color(&self) -> Option<String> {
        let fg = |color: Color| format!("\x1b[{}m", color.to_fg_str());
        match self {
            LogLevel::Trace => Some(fg(Color::BrightBlack)),
            LogLevel::Debug => Some(fg(Color::Blue)),
            LogLevel::Info => Some(fg(Color::Green)),
            LogLevel::Warn => Some(fg(Color::Yellow)),
            LogLevel::Error => Some(fg(Color::Red)),
            LogLevel::Fatal => Some(format!(
                "\x1b[{};{}m",
                Color::Red.to_bg_str(),
                Color::BrightWhite.to_fg_str()
            )),
            LogLevel::Off => None,
        }
    }
}

/// Escape sequence that restores the terminal's default attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "OFF" | "NONE" => Ok(LogLevel::Off),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
