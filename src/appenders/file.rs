//! File appender implementation
//!
//! The appender remembers only its path. Each write opens the file in append mode
//! without `create`, so a file removed after configuration disables the sink for that
//! write instead of being silently recreated.

use crate::core::{Appender, LogEntry, LoggerError, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAppender {
    path: PathBuf,
    name: String,
}

impl FileAppender {
    /// Point at `path`, creating an empty file if none exists yet
    ///
    /// Existing content is left untouched.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("creating log file", path.display().to_string(), e)
            })?;

        let name = format!("file:{}", path.display());
        Ok(Self { path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` plus a newline; `Ok(false)` when the file no longer exists
    pub fn write_line(&self, line: &str) -> Result<bool> {
        let mut file = match OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(LoggerError::io_operation(
                    "opening log file",
                    self.path.display().to_string(),
                    e,
                ))
            }
        };

        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        file.write_all(output.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
        })?;
        Ok(true)
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<bool> {
        self.write_line(&entry.line)
    }

    fn flush(&mut self) -> Result<()> {
        // Writes are unbuffered and the handle is closed after each one.
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.log");

        let appender = FileAppender::create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert_eq!(appender.path(), path.as_path());
    }

    #[test]
    fn test_create_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.log");
        fs::write(&path, "earlier\n").unwrap();

        FileAppender::create(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\n");
    }

    #[test]
    fn test_write_line_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.log");
        let appender = FileAppender::create(&path).unwrap();

        assert!(appender.write_line("one").unwrap());
        assert!(appender.write_line("two").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_deleted_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.log");
        let appender = FileAppender::create(&path).unwrap();

        fs::remove_file(&path).unwrap();
        assert!(!appender.write_line("lost").unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("messages.log");

        let err = FileAppender::create(&path).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
