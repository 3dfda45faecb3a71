//! Logging macros for ergonomic argument passing.
//!
//! The level methods take a `&[LogArg]`; these macros convert each trailing
//! argument with `LogArg::from` so plain values can be passed directly. Every
//! macro evaluates to the level method's `Result<String>`.
//!
//! # Examples
//!
//! ```no_run
//! use ns_logger::prelude::*;
//! use ns_logger::{event, info};
//!
//! let log = Registry::new().acquire(LoggerOptions::new()).unwrap();
//!
//! // Basic logging
//! info!(log, "Server started").unwrap();
//!
//! // With placeholders
//! let port = 8080;
//! info!(log, "Server listening on port %d", port).unwrap();
//!
//! // Events carry an id
//! event!(log, Some("USER_LOGIN"), "user %s logged in", "alice").unwrap();
//! ```

/// Log a message at an explicit level.
///
/// ```no_run
/// # use ns_logger::prelude::*;
/// # let logger = Registry::new().acquire(LoggerOptions::new()).unwrap();
/// use ns_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: %d", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $body, &[$($crate::LogArg::from($arg)),*])
    };
}

/// Log a debug-level message (only rendered when the logger has `debug` on).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $body $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $body $(, $arg)*)
    };
}

/// Log a warn-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $body $(, $arg)*)
    };
}

/// Alias for [`warn!`].
#[macro_export]
macro_rules! warning {
    ($logger:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $body $(, $arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $body $(, $arg)*)
    };
}

/// Log an EVENT line; `$id` is an `Option<&str>`.
#[macro_export]
macro_rules! event {
    ($logger:expr, $id:expr, $body:expr $(, $arg:expr)* $(,)?) => {
        $logger.event($id, $body, &[$($crate::LogArg::from($arg)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn logger(dir: &TempDir) -> std::sync::Arc<Logger> {
        Registry::new()
            .acquire(
                LoggerOptions::new()
                    .directory(dir.path())
                    .colors(false)
                    .debug(true)
                    .to_console(false)
                    .namespace("macros"),
            )
            .unwrap()
    }

    fn body(line: &str) -> &str {
        line.split_once(" ~> ").unwrap().1
    }

    #[test]
    fn test_log_macro() {
        let dir = TempDir::new().unwrap();
        let log = logger(&dir);
        let line = log!(log, LogLevel::Info, "code %d", 500).unwrap();
        assert_eq!(body(&line), "code 500");
    }

    #[test]
    fn test_all_level_macros() {
        let dir = TempDir::new().unwrap();
        let log = logger(&dir);

        assert!(debug!(log, "d").unwrap().starts_with("[DEBUG]"));
        assert!(info!(log, "i").unwrap().starts_with("[INFO ]"));
        assert!(warn!(log, "w").unwrap().starts_with("[WARN ]"));
        assert!(warning!(log, "w").unwrap().starts_with("[WARN ]"));
        assert!(error!(log, "e").unwrap().starts_with("[ERROR]"));
        assert!(event!(log, None, "v").unwrap().starts_with("[EVENT]"));
    }

    #[test]
    fn test_mixed_argument_types() {
        let dir = TempDir::new().unwrap();
        let log = logger(&dir);

        let line = info!(
            log,
            "%s %d %.1f %s %j",
            "text",
            -3,
            2.5,
            true,
            json!({"k": [1, 2]}),
        )
        .unwrap();
        assert_eq!(body(&line), r#"text -3 2.5 true {"k":[1,2]}"#);
    }

    #[test]
    fn test_event_macro_with_id() {
        let dir = TempDir::new().unwrap();
        let log = logger(&dir);
        let line = event!(log, Some("EVT-1"), "n=%d", 1).unwrap();
        assert_eq!(body(&line), "EVT-1 => n=1");
    }
}
