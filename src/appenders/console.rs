//! Console appender implementation

use crate::core::{Appender, LogRecord, Result};
use std::io::{self, Write};

/// Always-on sink writing rendered records to standard output.
///
/// Records are written verbatim: console records already carry their ANSI
/// colors and file records routed here carry none.
pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Write to `writer` instead of standard output.
    ///
    /// # Example
    ///
    /// ```
    /// use game_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writer(std::io::sink());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.writer.write_all(record.rendered.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
