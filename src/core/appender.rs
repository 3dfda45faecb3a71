//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

pub trait Appender: Send {
    /// Write one entry, returning `false` when the sink skipped it
    fn append(&mut self, entry: &LogEntry) -> Result<bool>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
