//! src/registry.rs
//! Process-wide logger registry: namespace table, global overrides,
//! observer modules, and the swappable output sink.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

use crate::config::LogSettings;
use crate::error::LogError;
use crate::event::LogModule;
use crate::logger::{
    BufferedLogger, BufferedLoggerOptions, Logger, LoggerOptions, PerformanceLogger,
    PerformanceLoggerOptions,
};
use crate::sink::{ConsoleSink, LogSink};

/// Kind of logger registered under a namespace.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LoggerKind {
    /// A plain namespace logger.
    Plain,
    /// An interval-profiling logger.
    Performance,
    /// A deferred-flush logger.
    Buffered,
}

impl LoggerKind {
    /// Returns the lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Performance => "performance",
            Self::Buffered => "buffered",
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry stored in the registry's namespace table.
///
/// Handles are cheap clones of shared state, so cloning an entry out of the
/// table still refers to the one logger instance for that namespace.
#[derive(Clone, Debug)]
pub enum LoggerEntry {
    /// A plain namespace logger.
    Plain(Logger),
    /// An interval-profiling logger.
    Performance(PerformanceLogger),
    /// A deferred-flush logger.
    Buffered(BufferedLogger),
}

impl LoggerEntry {
    /// Returns the base namespace logger backing this entry.
    #[must_use]
    pub fn base(&self) -> &Logger {
        match self {
            Self::Plain(logger) => logger,
            Self::Performance(logger) => logger.logger(),
            Self::Buffered(logger) => logger.logger(),
        }
    }

    /// Returns the kind of logger stored in this entry.
    #[must_use]
    pub const fn kind(&self) -> LoggerKind {
        match self {
            Self::Plain(_) => LoggerKind::Plain,
            Self::Performance(_) => LoggerKind::Performance,
            Self::Buffered(_) => LoggerKind::Buffered,
        }
    }
}

#[derive(Default)]
struct RegistryState {
    loggers: HashMap<String, LoggerEntry>,
    log_all: bool,
    log_only: Option<HashSet<String>>,
}

/// Process-wide registry mapping namespaces to logger instances.
///
/// The registry owns all shared logging state: the namespace table, the
/// log-all override, the observer-module list, and the output sink. The
/// process-wide instance is created lazily by [`global`](Self::global) and
/// lives for the process duration; test harnesses construct fresh registries
/// with [`new`](Self::new) so state never leaks between tests.
pub struct LoggerRegistry {
    settings: LogSettings,
    state: Mutex<RegistryState>,
    modules: Mutex<Vec<Arc<dyn LogModule>>>,
    sink: RwLock<Arc<dyn LogSink>>,
}

static GLOBAL: OnceLock<Arc<LoggerRegistry>> = OnceLock::new();

impl LoggerRegistry {
    /// Creates a fresh registry with the supplied settings and the default
    /// console sink.
    #[must_use]
    pub fn new(settings: LogSettings) -> Arc<Self> {
        Arc::new(Self {
            settings,
            state: Mutex::new(RegistryState::default()),
            modules: Mutex::new(Vec::new()),
            sink: RwLock::new(Arc::new(ConsoleSink)),
        })
    }

    /// Returns the process-wide registry, creating it on first access.
    ///
    /// Settings are read from the environment exactly once, at creation.
    pub fn global() -> &'static Arc<Self> {
        GLOBAL.get_or_init(|| Self::new(LogSettings::from_env()))
    }

    /// Returns the settings this registry was created with.
    #[must_use]
    pub fn settings(&self) -> &LogSettings {
        &self.settings
    }

    /// Looks up the entry registered for `namespace`; never creates one.
    #[must_use]
    pub fn entry(&self, namespace: &str) -> Option<LoggerEntry> {
        self.state_lock().loggers.get(namespace).cloned()
    }

    /// Stores or overwrites the entry for `namespace`.
    pub fn set_logger(&self, namespace: impl Into<String>, entry: LoggerEntry) {
        self.state_lock().loggers.insert(namespace.into(), entry);
    }

    /// Returns a snapshot of every registered namespace and its entry.
    #[must_use]
    pub fn all_loggers(&self) -> Vec<(String, LoggerEntry)> {
        self.state_lock()
            .loggers
            .iter()
            .map(|(namespace, entry)| (namespace.clone(), entry.clone()))
            .collect()
    }

    /// Appends an observer module; addition order is notification order.
    pub fn add_module(&self, module: Arc<dyn LogModule>) {
        self.modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(module);
    }

    /// Returns a snapshot of the registered observer modules.
    #[must_use]
    pub fn modules(&self) -> Vec<Arc<dyn LogModule>> {
        self.modules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Gating decision for a namespaced `log` call.
    ///
    /// In log-all mode the per-logger `enabled` flag is ignored and a
    /// namespace passes iff the only-namespaces filter is unset or contains
    /// it; otherwise the flag decides.
    #[must_use]
    pub fn should_log(&self, namespace: &str, enabled: bool) -> bool {
        let state = self.state_lock();
        if state.log_all {
            state
                .log_only
                .as_ref()
                .is_none_or(|only| only.contains(namespace))
        } else {
            enabled
        }
    }

    /// Sets or clears the global log-all debug override.
    ///
    /// Both override fields are replaced together; per-logger `enabled`
    /// flags are untouched, so leaving log-all mode restores the exact
    /// pre-override gating behaviour.
    pub fn set_log_all_mode(&self, enabled: bool, only_namespaces: Option<&[&str]>) {
        let mut state = self.state_lock();
        state.log_all = enabled;
        state.log_only = only_namespaces
            .map(|namespaces| namespaces.iter().map(|ns| (*ns).to_string()).collect());
    }

    /// Replaces the output sink wholesale; last writer wins.
    pub fn set_sink(&self, sink: Arc<dyn LogSink>) {
        *self.sink.write().unwrap_or_else(PoisonError::into_inner) = sink;
    }

    pub(crate) fn sink(&self) -> Arc<dyn LogSink> {
        self.sink
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the plain logger for `namespace`, creating and registering it
    /// on first request.
    ///
    /// Options only apply on creation; a second request returns the original
    /// instance unchanged, whatever options it is given (first-writer-wins).
    pub fn get_logger(
        self: &Arc<Self>,
        namespace: &str,
        options: LoggerOptions,
    ) -> Result<Logger, LogError> {
        validate_namespace(namespace, "get_logger")?;
        let mut state = self.state_lock();
        match state.loggers.get(namespace) {
            Some(LoggerEntry::Plain(existing)) => Ok(existing.clone()),
            Some(other) => Err(LogError::KindMismatch {
                namespace: namespace.to_string(),
                existing: other.kind(),
            }),
            None => {
                let logger = Logger::new(namespace, options, Arc::downgrade(self));
                state
                    .loggers
                    .insert(namespace.to_string(), LoggerEntry::Plain(logger.clone()));
                Ok(logger)
            }
        }
    }

    /// Returns the performance logger for `namespace`, creating and
    /// registering it on first request. First-writer-wins, as with
    /// [`get_logger`](Self::get_logger).
    pub fn get_performance_logger(
        self: &Arc<Self>,
        namespace: &str,
        options: PerformanceLoggerOptions,
    ) -> Result<PerformanceLogger, LogError> {
        validate_namespace(namespace, "get_performance_logger")?;
        let mut state = self.state_lock();
        match state.loggers.get(namespace) {
            Some(LoggerEntry::Performance(existing)) => Ok(existing.clone()),
            Some(other) => Err(LogError::KindMismatch {
                namespace: namespace.to_string(),
                existing: other.kind(),
            }),
            None => {
                let base = Logger::new(namespace, options.logger.clone(), Arc::downgrade(self));
                let logger = PerformanceLogger::new(base, &options);
                state.loggers.insert(
                    namespace.to_string(),
                    LoggerEntry::Performance(logger.clone()),
                );
                Ok(logger)
            }
        }
    }

    /// Returns the buffered logger for `namespace`, creating and registering
    /// it on first request. First-writer-wins, as with
    /// [`get_logger`](Self::get_logger).
    pub fn get_buffered_logger(
        self: &Arc<Self>,
        namespace: &str,
        options: BufferedLoggerOptions,
    ) -> Result<BufferedLogger, LogError> {
        validate_namespace(namespace, "get_buffered_logger")?;
        let mut state = self.state_lock();
        match state.loggers.get(namespace) {
            Some(LoggerEntry::Buffered(existing)) => Ok(existing.clone()),
            Some(other) => Err(LogError::KindMismatch {
                namespace: namespace.to_string(),
                existing: other.kind(),
            }),
            None => {
                let base = Logger::new(namespace, options.logger.clone(), Arc::downgrade(self));
                let logger = BufferedLogger::new(base, &options);
                state
                    .loggers
                    .insert(namespace.to_string(), LoggerEntry::Buffered(logger.clone()));
                Ok(logger)
            }
        }
    }

    /// Prints the call-count report of every registered performance logger.
    pub fn print_log_counts(&self) {
        for (_, entry) in self.all_loggers() {
            if let LoggerEntry::Performance(perf) = entry {
                perf.print_counts();
            }
        }
    }

    fn state_lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state_lock();
        f.debug_struct("LoggerRegistry")
            .field("namespaces", &state.loggers.len())
            .field("log_all", &state.log_all)
            .finish_non_exhaustive()
    }
}

fn validate_namespace(namespace: &str, factory: &'static str) -> Result<(), LogError> {
    if namespace.is_empty() {
        Err(LogError::EmptyNamespace { factory })
    } else {
        Ok(())
    }
}
