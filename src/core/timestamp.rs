//! Timestamp formatting utilities
//!
//! Patterns are strftime-compatible as understood by `chrono`, plus `%L` for
//! zero-padded milliseconds. The default renders as `2025-01-08 @ 10:30:45:123`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d @ %H:%M:%S:%L";

/// A validated timestamp pattern
///
/// # Examples
///
/// ```
/// use ns_logger::core::DateFormat;
/// use chrono::{TimeZone, Utc};
///
/// let format = DateFormat::new("%H:%M:%S.%L").unwrap();
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format.format(&at), "10:30:45.000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    chrono_pattern: String,
}

impl DateFormat {
    /// Validate `pattern`, rejecting tokens chrono cannot render
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let chrono_pattern = translate(&pattern);

        if StrftimeItems::new(&chrono_pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "dateFormat",
                format!("unsupported pattern '{}'", pattern),
            ));
        }

        Ok(Self {
            pattern,
            chrono_pattern,
        })
    }

    /// The pattern as supplied by the caller
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = String::new();
        if write!(out, "{}", datetime.format(&self.chrono_pattern)).is_err() {
            // Items were validated up front, but a zone-dependent token can still fail.
            out.clear();
            let _ = write!(out, "{}", datetime.format("%Y-%m-%d %H:%M:%S"));
        }
        out
    }

    /// Render the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            chrono_pattern: translate(DEFAULT_DATE_FORMAT),
        }
    }
}

/// Rewrite `%L` into chrono's millisecond specifier, leaving everything else untouched
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('L') => out.push_str("%3f"),
            Some(next) => {
                out.push('%');
                out.push(next);
            }
            None => out.push('%'),
        }
    }
    out
}
