//! Logger configuration and option resolution
//!
//! [`LoggerOptions`] holds caller overrides. Every field is optional; the file sink
//! fields and `namespace` additionally distinguish an explicit `null` (disable / anonymous)
//! from an absent value (use the default). [`LoggerConfig::resolve`] merges the
//! overrides onto the documented defaults.

use super::error::Result;
use super::timestamp::DEFAULT_DATE_FORMAT;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DIRECTORY: &str = "./logs";
pub const DEFAULT_MESSAGE_FILE: &str = "messages.log";
pub const DEFAULT_EVENT_FILE: &str = "events.log";
pub const DEFAULT_NAMESPACE: &str = "default";

/// What to do when the number of placeholders and arguments differ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgPolicy {
    /// Unmatched placeholders stay literal, surplus arguments are ignored
    #[default]
    Permissive,
    /// Any mismatch is a [`LoggerError::ParameterCount`](super::LoggerError::ParameterCount)
    Strict,
}

/// Fully resolved per-instance configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    pub enabled: bool,
    pub colors: bool,
    pub debug: bool,
    pub to_console: bool,
    pub use_console_debug: bool,
    pub nofile: bool,
    pub directory: PathBuf,
    pub message_file: Option<String>,
    pub event_file: Option<String>,
    pub namespace: String,
    pub ns_width: i32,
    pub date_format: String,
    pub arg_policy: ArgPolicy,
}

impl LoggerConfig {
    /// Merge `options` over the defaults
    ///
    /// An explicit `null` namespace is replaced with a fresh UUID.
    pub fn resolve(options: &LoggerOptions) -> Self {
        let defaults = Self::default();
        let namespace = match &options.namespace {
            None => defaults.namespace,
            Some(Some(ns)) => ns.clone(),
            Some(None) => uuid::Uuid::new_v4().to_string(),
        };

        Self {
            enabled: options.enabled.unwrap_or(defaults.enabled),
            colors: options.colors.unwrap_or(defaults.colors),
            debug: options.debug.unwrap_or(defaults.debug),
            to_console: options.to_console.unwrap_or(defaults.to_console),
            use_console_debug: options
                .use_console_debug
                .unwrap_or(defaults.use_console_debug),
            nofile: options.nofile.unwrap_or(defaults.nofile),
            directory: options.directory.clone().unwrap_or(defaults.directory),
            message_file: options
                .message_file
                .clone()
                .unwrap_or(defaults.message_file),
            event_file: options.event_file.clone().unwrap_or(defaults.event_file),
            namespace,
            ns_width: options.ns_width.unwrap_or(defaults.ns_width),
            date_format: options.date_format.clone().unwrap_or(defaults.date_format),
            arg_policy: options.arg_policy.unwrap_or(defaults.arg_policy),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            debug: false,
            to_console: true,
            use_console_debug: false,
            nofile: false,
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            message_file: Some(DEFAULT_MESSAGE_FILE.to_string()),
            event_file: Some(DEFAULT_EVENT_FILE.to_string()),
            namespace: DEFAULT_NAMESPACE.to_string(),
            ns_width: -1,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            arg_policy: ArgPolicy::Permissive,
        }
    }
}

/// Caller-supplied overrides
///
/// Deserializes from camelCase keys, so the same options can be kept in a JSON file:
///
/// ```
/// use ns_logger::LoggerOptions;
///
/// let options = LoggerOptions::from_json(
///     r#"{ "namespace": "svc", "nsWidth": 5, "eventFile": null }"#,
/// ).unwrap();
/// assert_eq!(options.event_file, Some(None));
/// assert_eq!(options.message_file, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerOptions {
    pub enabled: Option<bool>,
    pub colors: Option<bool>,
    pub debug: Option<bool>,
    pub to_console: Option<bool>,
    pub use_console_debug: Option<bool>,
    pub nofile: Option<bool>,
    pub directory: Option<PathBuf>,
    #[serde(deserialize_with = "explicit")]
    pub message_file: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub event_file: Option<Option<String>>,
    #[serde(deserialize_with = "explicit")]
    pub namespace: Option<Option<String>>,
    pub ns_width: Option<i32>,
    pub date_format: Option<String>,
    pub arg_policy: Option<ArgPolicy>,
}

/// A present key always yields `Some`, so `null` becomes `Some(None)` instead of `None`
fn explicit<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn to_console(mut self, to_console: bool) -> Self {
        self.to_console = Some(to_console);
        self
    }

    /// Send DEBUG lines to stdout instead of the `DEBUG`-gated debug channel
    #[must_use = "builder methods return a new value"]
    pub fn use_console_debug(mut self, use_console_debug: bool) -> Self {
        self.use_console_debug = Some(use_console_debug);
        self
    }

    /// Skip both file sinks without touching the directory
    #[must_use = "builder methods return a new value"]
    pub fn nofile(mut self, nofile: bool) -> Self {
        self.nofile = Some(nofile);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn message_file(mut self, name: impl Into<String>) -> Self {
        self.message_file = Some(Some(name.into()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_message_file(mut self) -> Self {
        self.message_file = Some(None);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn event_file(mut self, name: impl Into<String>) -> Self {
        self.event_file = Some(Some(name.into()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_event_file(mut self) -> Self {
        self.event_file = Some(None);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(Some(namespace.into()));
        self
    }

    /// Request a generated namespace
    #[must_use = "builder methods return a new value"]
    pub fn anonymous(mut self) -> Self {
        self.namespace = Some(None);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn ns_width(mut self, width: i32) -> Self {
        self.ns_width = Some(width);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = Some(pattern.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn arg_policy(mut self, policy: ArgPolicy) -> Self {
        self.arg_policy = Some(policy);
        self
    }
}
