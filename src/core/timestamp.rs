//! Timestamp formatting utilities
//!
//! File records carry a human-readable local time. The default layout mirrors
//! C's `ctime` (`Sun Oct 18 09:05:03 2026`) without its trailing newline.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const CTIME_LAYOUT: &str = "%a %b %e %H:%M:%S %Y";

/// Timestamp layout for file records
///
/// # Examples
///
/// ```
/// use game_logger::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2026, 10, 18, 9, 5, 3).unwrap();
/// assert_eq!(TimestampFormat::Ctime.format(&at), "Sun Oct 18 09:05:03 2026");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `ctime` layout: `Sun Oct 18 09:05:03 2026`
    #[default]
    Ctime,

    /// ISO 8601 local time with milliseconds: `2026-10-18T09:05:03.123`
    Iso8601,

    /// RFC 3339 with the local offset: `2026-10-18T09:05:03+02:00`
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this layout.
    ///
    /// Line breaks are never part of the result.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let rendered = match self {
            TimestampFormat::Ctime => datetime.format(CTIME_LAYOUT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => {
                // chrono reports a bad specifier through fmt::Error
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    out = datetime.format(CTIME_LAYOUT).to_string();
                }
                out
            }
        };
        if rendered.contains(is_line_break) {
            rendered.replace(is_line_break, "")
        } else {
            rendered
        }
    }

    /// Whether every strftime specifier in a `Custom` layout is understood.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(format_str) => {
                !StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }

    /// Format the current local time.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}
