//! Console appender implementation

use crate::core::format::{self, Dialect};
use crate::core::{Appender, LogEntry, LogLevel, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub type ConsoleWriter = Box<dyn Write + Send>;

pub struct ConsoleAppender {
    stdout: ConsoleWriter,
    stderr: ConsoleWriter,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Redirect both streams, e.g. into buffers for inspection
    pub fn with_writers(
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        Self {
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    /// Render the console form of an entry
    ///
    /// Arguments are substituted here rather than reused from the file line, so
    /// `%O` placeholders come out pretty-printed.
    pub fn format(entry: &LogEntry) -> String {
        format::substitute(&entry.console_template, &entry.args, Dialect::Console)
    }

    /// Write a DEBUG entry through the debug channel on stderr
    ///
    /// The channel prefixes the namespace and skips console placeholder renormalization.
    pub fn write_debug(&mut self, entry: &LogEntry) -> Result<bool> {
        let Some(template) = entry.debug_template.as_deref() else {
            return Ok(false);
        };
        let body = format::substitute(template, &entry.args, Dialect::Console);
        writeln!(self.stderr, "  {} {}", entry.namespace.trim(), body)?;
        Ok(true)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<bool> {
        let output = Self::format(entry);

        // Route Error to stderr, others to stdout
        match entry.level {
            LogLevel::Error => writeln!(self.stderr, "{}", output)?,
            _ => writeln!(self.stdout, "{}", output)?,
        }
        Ok(true)
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        self.stdout.flush()?;
        self.stderr.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Cloneable in-memory writer, handy for capturing console output
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
