//! Namespace → logger instance registry

use super::config::{LoggerConfig, LoggerOptions};
use super::error::Result;
use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Holds at most one [`Logger`] per namespace
///
/// Acquiring a namespace that already exists reconfigures that instance in place and
/// hands back the same `Arc`. Lookup, creation and configuration happen under a single
/// lock, so concurrent callers never create duplicates or observe a half-applied
/// configuration.
///
/// Applications normally create one registry and pass it around; [`Registry::global`]
/// and [`instance`] are available where a process-wide one is more convenient.
#[derive(Default)]
pub struct Registry {
    instances: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, created on first use
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Resolve `options`, then create or reconfigure the instance for that namespace
    ///
    /// A new namespace is registered only once its configuration succeeded.
    pub fn acquire(&self, options: LoggerOptions) -> Result<Arc<Logger>> {
        let config = LoggerConfig::resolve(&options);
        let mut instances = self.instances.lock();

        if let Some(existing) = instances.get(&config.namespace) {
            existing.configure(config)?;
            return Ok(Arc::clone(existing));
        }

        let namespace = config.namespace.clone();
        let logger = Arc::new(Logger::new());
        logger.configure(config)?;
        instances.insert(namespace, Arc::clone(&logger));
        Ok(logger)
    }

    pub fn get(&self, namespace: &str) -> Option<Arc<Logger>> {
        self.instances.lock().get(namespace).cloned()
    }

    /// Registered namespaces in sorted order
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instances.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instances:")?;
        for namespace in self.namespaces() {
            writeln!(f, " - {}", namespace)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("namespaces", &self.namespaces())
            .finish()
    }
}

/// Acquire a logger from the process-wide registry
pub fn instance(options: LoggerOptions) -> Result<Arc<Logger>> {
    Registry::global().acquire(options)
}
