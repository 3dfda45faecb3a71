//! Rendered log entry handed to the sinks

use super::log_arg::LogArg;
use super::log_level::LogLevel;

/// One message after rendering
///
/// File sinks write [`line`](Self::line). The console re-renders
/// [`console_template`](Self::console_template) with the untouched arguments so that
/// object placeholders go through its own formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub namespace: String,
    /// Substituted line without color decoration
    pub line: String,
    /// Substituted line as returned to the caller, decorated when colors are on
    pub styled: String,
    /// Decorated line with console placeholder spellings and no substitution applied
    pub console_template: String,
    /// `timestamp ~> body` template for the debug channel, DEBUG entries only
    pub debug_template: Option<String>,
    pub args: Vec<LogArg>,
}
