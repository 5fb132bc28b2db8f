//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A sink the pipeline worker writes rendered records into.
pub trait Appender: Send {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
