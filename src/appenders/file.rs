//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Optional sink appending rendered records to a single text file.
///
/// No rotation and no size limit. Buffered output is flushed by the pipeline
/// whenever its queue runs empty, and on drop.
pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileAppender {
    /// Open `path` for appending, creating it if missing.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}' for appending", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.writer
            .write_all(record.rendered.as_bytes())
            .map_err(|e| LoggerError::file_appender(self.path.display().to_string(), e.to_string()))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Destination, LogLevel};
    use std::fs;
    use tempfile::TempDir;

    fn record(text: &str) -> LogRecord {
        LogRecord::new(LogLevel::Info, crate::origin!(), text.to_string(), Destination::File)
    }

    #[test]
    fn test_appends_across_reopen() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("game.log");

        {
            let mut appender = FileAppender::new(&path).expect("open");
            appender.append(&record("first\n")).expect("append");
        }
        {
            let mut appender = FileAppender::new(&path).expect("reopen");
            appender.append(&record("second\n")).expect("append");
            appender.flush().expect("flush");
        }

        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_failure_reports_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("game.log");

        let err = FileAppender::new(&path).err().expect("should fail");
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("game.log"));
    }
}
