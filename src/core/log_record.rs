//! Log record structure

use super::log_level::LogLevel;
use super::origin::Origin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sink a record is addressed to, fixed by the entry point that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Console,
    File,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Console => "console",
            Destination::File => "file",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully rendered line waiting in the pipeline queue.
///
/// Rendering happens on the calling thread, so the worker only writes
/// `rendered` and never formats anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub origin: Origin,
    pub rendered: String,
    pub destination: Destination,
}

impl LogRecord {
    pub fn new(level: LogLevel, origin: Origin, rendered: String, destination: Destination) -> Self {
        Self {
            level,
            origin,
            rendered,
            destination,
        }
    }

    #[inline]
    pub fn is_file_record(&self) -> bool {
        self.destination == Destination::File
    }
}
