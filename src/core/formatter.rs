//! Record rendering
//!
//! Turns a level, an [`Origin`] and pre-captured format arguments into the
//! exact line a sink writes:
//! - Console: colored by level, e.g.
//!   `ESC[32mINFO world/spawn.rs:42 in function ESC[0m'game::world::spawn'ESC[32m: spawned 3ESC[0m`
//! - File: timestamped and uncolored, e.g.
//!   `[Sun Oct 18 09:05:03 2026] - [INFO] world/spawn.rs:42 in function 'game::world::spawn': spawned 3`
//!
//! Rendering performs no I/O and takes no locks.

use super::error::LoggerError;
use super::log_level::{LogLevel, ANSI_RESET};
use super::log_record::Destination;
use super::origin::Origin;
use super::timestamp::TimestampFormat;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Stateless renderer; only carries the timestamp layout for file records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFormatter {
    timestamp_format: TimestampFormat,
}

impl RecordFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    /// Render one record for `destination`, stamping file records with the
    /// current local time.
    pub fn render(
        &self,
        level: LogLevel,
        origin: &Origin,
        args: fmt::Arguments<'_>,
        destination: Destination,
    ) -> String {
        match destination {
            Destination::Console => render_console(level, origin, args),
            Destination::File => render_file(level, origin, args, &self.timestamp_format.now()),
        }
    }
}

/// Console form, terminated by a newline.
pub fn render_console(level: LogLevel, origin: &Origin, args: fmt::Arguments<'_>) -> String {
    let color = level.ansi_color().unwrap_or_default();
    let message = render_message(args, Destination::Console);
    format!(
        "{color}{level} {file}:{line} in function {reset}'{function}'{color}: {message}{reset}\n",
        color = color,
        level = level.to_str(),
        file = origin.short_file(),
        line = origin.line,
        reset = ANSI_RESET,
        function = origin.function,
        message = message,
    )
}

/// File form with a caller-supplied timestamp, terminated by a newline.
pub fn render_file(
    level: LogLevel,
    origin: &Origin,
    args: fmt::Arguments<'_>,
    timestamp: &str,
) -> String {
    let message = render_message(args, Destination::File);
    format!(
        "[{}] - [{}] {}:{} in function '{}': {}\n",
        timestamp,
        level.to_str(),
        origin.short_file(),
        origin.line,
        origin.function,
        message
    )
}

/// Expand the user message; a failing or panicking `Display` impl becomes a
/// visible placeholder instead of reaching the caller.
fn render_message(args: fmt::Arguments<'_>, destination: Destination) -> String {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut message = String::new();
        fmt::write(&mut message, args).map(|()| message)
    }));

    match outcome {
        Ok(Ok(message)) => message,
        Ok(Err(_)) => placeholder(destination, "a Display implementation returned an error"),
        Err(_) => placeholder(destination, "a Display implementation panicked"),
    }
}

fn placeholder(destination: Destination, reason: &str) -> String {
    format!("<{}>", LoggerError::formatter(destination.as_str(), reason))
}
