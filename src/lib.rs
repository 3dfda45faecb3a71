//! # ns_logger
//!
//! A namespaced, configurable message logger.
//!
//! Callers acquire a named [`Logger`] from a [`Registry`] and write leveled messages
//! through it. Each message becomes one line,
//!
//! ```text
//! [INFO ] 2025-01-08 @ 10:30:45:123 [svc  ] ~> hello world
//! ```
//!
//! appended to `<directory>/messages.log` (every level), to `<directory>/events.log`
//! (EVENT only) and optionally echoed to stdout/stderr.
//!
//! ## Features
//!
//! - **One instance per namespace**: re-acquiring a namespace reconfigures it in place
//! - **printf-style placeholders**: `%s`, `%d`, `%f`, `%j` and friends with typed arguments
//! - **Per-instance colors**: decoration never leaks between loggers
//! - **Explicit sink control**: `null` file names disable a sink without touching disk
//!
//! ```no_run
//! use ns_logger::prelude::*;
//! use ns_logger::info;
//!
//! let registry = Registry::new();
//! let log = registry
//!     .acquire(LoggerOptions::new().directory("/tmp/x").namespace("svc").ns_width(5))
//!     .unwrap();
//!
//! let line = info!(log, "hello %s", "world").unwrap();
//! assert!(line.contains("hello world"));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        instance, Appender, ArgPolicy, LogArg, LogLevel, Logger, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerOptions, Registry, Result,
    };
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    instance, Appender, ArgPolicy, DateFormat, LogArg, LogEntry, LogLevel, Logger, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerOptions, Registry, Result, NULL_EVENT_ID,
};
