//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod debug_channel;
pub mod error;
pub mod format;
pub mod log_arg;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod render;
pub mod style;
pub mod timestamp;

pub use appender::Appender;
pub use config::{ArgPolicy, LoggerConfig, LoggerOptions};
pub use debug_channel::DebugFilter;
pub use error::{LoggerError, Result};
pub use log_arg::LogArg;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use registry::{instance, Registry};
pub use render::{namespace_column, Renderer, NULL_EVENT_ID};
pub use timestamp::{DateFormat, DEFAULT_DATE_FORMAT};
