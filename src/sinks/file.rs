//! File sink implementation

use crate::core::{Level, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Sink appending lines to a file.
///
/// Each line is flushed as it is written, matching the line-buffered behavior
/// of a console stream; the configuration holds the sink for the lifetime of
/// the process, so nothing would otherwise drain the buffer on exit.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, _level: Level, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lines_are_appended_and_flushed() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let log_file = temp_dir.path().join("sink_test.log");

        let mut sink = FileSink::new(&log_file).expect("create sink");
        sink.write_line(Level::Info, "first line").expect("write");
        sink.write_line(Level::Warn, "second line").expect("write");

        let content = std::fs::read_to_string(&log_file).expect("read log file");
        assert_eq!(content, "first line\nsecond line\n");
    }

    #[test]
    fn test_reopening_appends() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let log_file = temp_dir.path().join("append_test.log");

        {
            let mut sink = FileSink::new(&log_file).expect("create sink");
            sink.write_line(Level::Info, "from first sink").expect("write");
        }
        {
            let mut sink = FileSink::new(&log_file).expect("reopen sink");
            sink.write_line(Level::Info, "from second sink").expect("write");
        }

        let content = std::fs::read_to_string(&log_file).expect("read log file");
        assert_eq!(content, "from first sink\nfrom second sink\n");
    }

    #[test]
    fn test_invalid_path_is_an_error() {
        let result = FileSink::new("/nonexistent-dir/deeper/file.log");
        assert!(result.is_err());
    }
}
