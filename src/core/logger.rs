//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    debug_channel::DebugFilter,
    error::{LoggerError, Result},
    log_arg::LogArg,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    render::Renderer,
    timestamp::DateFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::fmt;
use std::fs;
use std::path::PathBuf;

struct LoggerState {
    config: LoggerConfig,
    renderer: Renderer,
    message_file: Option<FileAppender>,
    event_file: Option<FileAppender>,
    console: ConsoleAppender,
    debug_channel: bool,
}

impl Default for LoggerState {
    fn default() -> Self {
        let config = LoggerConfig::default();
        let renderer = Renderer::with_date_format(&config, DateFormat::default());
        Self {
            config,
            renderer,
            message_file: None,
            event_file: None,
            console: ConsoleAppender::new(),
            debug_channel: false,
        }
    }
}

/// A namespaced logger instance
///
/// Instances are obtained from a [`Registry`](super::Registry), which guarantees one
/// instance per namespace. Every level method returns the rendered line, or an empty
/// string when the message was suppressed.
///
/// # Example
///
/// ```no_run
/// use ns_logger::prelude::*;
///
/// let registry = Registry::new();
/// let log = registry
///     .acquire(LoggerOptions::new().namespace("svc").ns_width(5))
///     .unwrap();
///
/// let line = log.info("hello %s", &["world".into()]).unwrap();
/// assert!(line.contains("hello world"));
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Zero-state instance; not usable for file output until configured
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(LoggerState::default()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the configuration and prepare the file sinks
    ///
    /// The new sinks are fully prepared before anything is swapped in, so a failure
    /// leaves the previous configuration in effect.
    pub(crate) fn configure(&self, config: LoggerConfig) -> Result<()> {
        let renderer = Renderer::new(&config)?;

        let (message_file, event_file) = if config.nofile {
            (None, None)
        } else {
            fs::create_dir_all(&config.directory).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    config.directory.display().to_string(),
                    e,
                )
            })?;

            let message_file = config
                .message_file
                .as_deref()
                .map(|name| FileAppender::create(config.directory.join(name)))
                .transpose()?;
            let event_file = config
                .event_file
                .as_deref()
                .map(|name| FileAppender::create(config.directory.join(name)))
                .transpose()?;
            (message_file, event_file)
        };

        let debug_channel = DebugFilter::from_env().is_enabled(&config.namespace);

        let mut state = self.state.lock();
        state.renderer = renderer;
        state.message_file = message_file;
        state.event_file = event_file;
        state.debug_channel = debug_channel;
        state.config = config;
        Ok(())
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> LoggerConfig {
        self.state.lock().config.clone()
    }

    pub fn namespace(&self) -> String {
        self.state.lock().config.namespace.clone()
    }

    pub fn message_file_path(&self) -> Option<PathBuf> {
        let state = self.state.lock();
        state.message_file.as_ref().map(|f| f.path().to_path_buf())
    }

    pub fn event_file_path(&self) -> Option<PathBuf> {
        let state = self.state.lock();
        state.event_file.as_ref().map(|f| f.path().to_path_buf())
    }

    /// Swap the console destination, e.g. to capture output
    pub fn set_console(&self, console: ConsoleAppender) {
        self.state.lock().console = console;
    }

    /// Force the debug channel on or off, overriding the `DEBUG` variable until the next configure
    pub fn set_debug_channel(&self, enabled: bool) {
        self.state.lock().debug_channel = enabled;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn log(&self, level: LogLevel, body: &str, args: &[LogArg]) -> Result<String> {
        self.dispatch(level, body, args, None)
    }

    #[inline]
    pub fn debug(&self, body: &str, args: &[LogArg]) -> Result<String> {
        self.log(LogLevel::Debug, body, args)
    }

    #[inline]
    pub fn info(&self, body: &str, args: &[LogArg]) -> Result<String> {
        self.log(LogLevel::Info, body, args)
    }

    #[inline]
    pub fn warn(&self, body: &str, args: &[LogArg]) -> Result<String> {
        self.log(LogLevel::Warn, body, args)
    }

    /// Alias for [`warn`](Self::warn)
    #[inline]
    pub fn warning(&self, body: &str, args: &[LogArg]) -> Result<String> {
        self.log(LogLevel::Warn, body, args)
    }

    #[inline]
    pub fn error(&self, body: &str, args: &[LogArg]) -> Result<String> {
        self.log(LogLevel::Error, body, args)
    }

    /// Log an EVENT line prefixed with `id => `
    ///
    /// A missing id is rendered as [`NULL_EVENT_ID`](super::render::NULL_EVENT_ID).
    /// EVENT lines go to both the event file and the message file.
    pub fn event(&self, id: Option<&str>, body: &str, args: &[LogArg]) -> Result<String> {
        self.dispatch(LogLevel::Event, body, args, id)
    }

    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if let Some(ref mut sink) = state.message_file {
            sink.flush()?;
        }
        if let Some(ref mut sink) = state.event_file {
            sink.flush()?;
        }
        state.console.flush()
    }

    fn dispatch(
        &self,
        level: LogLevel,
        body: &str,
        args: &[LogArg],
        event_id: Option<&str>,
    ) -> Result<String> {
        let mut state = self.state.lock();

        let Some(entry) = state.renderer.render(level, body, args, event_id)? else {
            self.metrics.record_suppressed();
            return Ok(String::new());
        };
        self.metrics.record_rendered();

        self.emit(&mut state, &entry)?;
        Ok(entry.styled)
    }

    /// Route a rendered entry to the event file, the message file and the console
    fn emit(&self, state: &mut LoggerState, entry: &LogEntry) -> Result<()> {
        if entry.level == LogLevel::Event {
            if let Some(ref mut sink) = state.event_file {
                if sink.append(entry)? {
                    self.metrics.record_event_write();
                } else {
                    self.metrics.record_missing_sink();
                }
            }
        }

        if let Some(ref mut sink) = state.message_file {
            if sink.append(entry)? {
                self.metrics.record_message_write();
            } else {
                self.metrics.record_missing_sink();
            }
        }

        if state.config.to_console {
            let written = if entry.level == LogLevel::Debug && !state.config.use_console_debug {
                if state.debug_channel {
                    state.console.write_debug(entry)
                } else {
                    Ok(false)
                }
            } else {
                state.console.append(entry)
            };

            match written {
                Ok(true) => {
                    self.metrics.record_console_write();
                }
                Ok(false) => {}
                Err(e) => {
                    // The console is best effort; file sinks already hold the line.
                    eprintln!(
                        "[LOGGER ERROR] {} write failed for '{}': {}",
                        state.console.name(),
                        entry.namespace,
                        e
                    );
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config();
        let json = serde_json::to_string_pretty(&config).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        let mut sinks: Vec<&str> = state
            .message_file
            .iter()
            .chain(state.event_file.iter())
            .map(|sink| sink.name())
            .collect();
        if state.config.to_console {
            sinks.push(state.console.name());
        }

        f.debug_struct("Logger")
            .field("config", &state.config)
            .field("sinks", &sinks)
            .field("metrics", &self.metrics)
            .finish()
    }
}
