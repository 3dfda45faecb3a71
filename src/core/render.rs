//! Message rendering
//!
//! Turns a level, a body template and its arguments into a [`LogEntry`]:
//!
//! ```text
//! [LEVEL] TIMESTAMP [NAMESPACE] ~> BODY
//! ```

use super::config::{ArgPolicy, LoggerConfig};
use super::error::{LoggerError, Result};
use super::format::{self, Dialect};
use super::log_arg::LogArg;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::style::{self, Palette};
use super::timestamp::DateFormat;

/// Event id used when the caller does not supply one
pub const NULL_EVENT_ID: &str = "NULL_EVENT_ID";

/// Namespace column: trimmed, then cut and left-justified to `width` when `width > 0`
pub fn namespace_column(namespace: &str, width: i32) -> String {
    let namespace = namespace.trim();
    if width <= 0 {
        return namespace.to_string();
    }
    let width = width as usize;
    let mut column: String = namespace.chars().take(width).collect();
    let len = column.chars().count();
    column.extend(std::iter::repeat(' ').take(width - len));
    column
}

#[derive(Debug, Clone)]
pub struct Renderer {
    enabled: bool,
    debug: bool,
    namespace: String,
    column: String,
    date_format: DateFormat,
    palette: Palette,
    policy: ArgPolicy,
}

impl Renderer {
    pub fn new(config: &LoggerConfig) -> Result<Self> {
        let date_format = DateFormat::new(config.date_format.as_str())?;
        Ok(Self::with_date_format(config, date_format))
    }

    pub(crate) fn with_date_format(config: &LoggerConfig, date_format: DateFormat) -> Self {
        Self {
            enabled: config.enabled,
            debug: config.debug,
            namespace: config.namespace.clone(),
            column: namespace_column(&config.namespace, config.ns_width),
            date_format,
            palette: Palette::new(config.colors),
            policy: config.arg_policy,
        }
    }

    /// Render a message, or `None` when the logger is disabled or the debug gate is closed
    pub fn render(
        &self,
        level: LogLevel,
        body: &str,
        args: &[LogArg],
        event_id: Option<&str>,
    ) -> Result<Option<LogEntry>> {
        if !self.enabled || (level == LogLevel::Debug && !self.debug) {
            return Ok(None);
        }

        if self.policy == ArgPolicy::Strict {
            let expected = format::count_placeholders(body);
            if expected != args.len() {
                return Err(LoggerError::parameter_count(expected, args.len(), body));
            }
        }

        let timestamp = self.date_format.now();
        let tag = self.palette.level(level);
        let styled_timestamp = self.palette.apply(style::TIMESTAMP, &timestamp);
        let styled_column = self.palette.apply(style::NAMESPACE, &self.column);

        let (prefix, styled_prefix) = if level == LogLevel::Event {
            let id = event_id.unwrap_or(NULL_EVENT_ID);
            (
                format!("{} => ", id),
                format!("{} => ", self.palette.apply(style::EVENT_ID, id)),
            )
        } else {
            (String::new(), String::new())
        };

        let text = format::substitute(&format::normalize_for_file(body), args, Dialect::File);

        let line = format!(
            "[{}] {} [{}] ~> {}{}",
            level.tag(),
            timestamp,
            self.column,
            prefix,
            text
        );
        let styled = format!(
            "[{}] {} [{}] ~> {}{}",
            tag, styled_timestamp, styled_column, styled_prefix, text
        );
        let console_template = format!(
            "[{}] {} [{}] ~> {}{}",
            format::escape(&tag),
            format::escape(&styled_timestamp),
            format::escape(&styled_column),
            format::escape(&styled_prefix),
            format::normalize_for_console(body)
        );
        let debug_template = (level == LogLevel::Debug)
            .then(|| format!("{} ~> {}", format::escape(&styled_timestamp), body));

        Ok(Some(LogEntry {
            level,
            namespace: self.namespace.clone(),
            line,
            styled,
            console_template,
            debug_template,
            args: args.to_vec(),
        }))
    }
}
