//! src/logger/mod.rs
//! Logger handles: per-namespace configuration and the fluent logging API.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use crate::dispatch::Severity;
use crate::registry::LoggerRegistry;

mod buffered;
mod performance;

pub use buffered::{BufferedLogger, BufferedLoggerOptions};
pub use performance::{Clock, PerformanceLogger, PerformanceLoggerOptions, SystemClock};

/// Configuration accepted by [`get_logger`](crate::get_logger).
///
/// All fields are optional in spirit: `LoggerOptions::default()` yields an
/// enabled logger with no prefix, no postfix, and the settings' default
/// color. Options only apply on first registration of a namespace;
/// re-requesting an existing namespace with different options silently
/// returns the original instance unchanged (first-writer-wins).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerOptions {
    /// Symbolic color for the namespace tag; `None` uses the settings'
    /// default color. Resolved to an escape sequence at emission time.
    pub color: Option<String>,
    /// Whether `log` calls emit in normal (non-override) mode.
    pub enabled: bool,
    /// Literal string prepended to every argument list.
    pub prefix: String,
    /// Literal string appended to every argument list.
    pub postfix: String,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            color: None,
            enabled: true,
            prefix: String::new(),
            postfix: String::new(),
        }
    }
}

struct LoggerCore {
    namespace: String,
    color: Option<String>,
    prefix: String,
    postfix: String,
    enabled: AtomicBool,
    registry: Weak<LoggerRegistry>,
}

/// Handle to a registered namespace logger.
///
/// Handles are cheap to clone; every clone shares the same underlying
/// configuration, so [`set_enabled`](Self::set_enabled) on one clone gates
/// all of them. Exactly one logger exists per namespace for the lifetime of
/// its registry.
///
/// # Examples
///
/// ```
/// use nslog::LoggerOptions;
///
/// let logger = nslog::get_logger("startup", LoggerOptions::default())?;
/// logger.log(["loading configuration"]).log(["done"]);
/// # Ok::<(), nslog::LogError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    core: Arc<LoggerCore>,
}

impl Logger {
    pub(crate) fn new(
        namespace: &str,
        options: LoggerOptions,
        registry: Weak<LoggerRegistry>,
    ) -> Self {
        Self {
            core: Arc::new(LoggerCore {
                namespace: namespace.to_string(),
                color: options.color,
                prefix: options.prefix,
                postfix: options.postfix,
                enabled: AtomicBool::new(options.enabled),
                registry,
            }),
        }
    }

    /// Returns the namespace this logger was registered under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.core.namespace
    }

    /// Reports whether `log` calls currently pass gating in normal mode.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.core.enabled.load(Ordering::Relaxed)
    }

    /// Enables or disables this namespace's `log` output.
    ///
    /// `warn` and `error` calls have independent always-log overrides and may
    /// still emit while the logger is disabled.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        self.core.enabled.store(enabled, Ordering::Relaxed);
        self
    }

    /// Reports whether two handles refer to the same underlying logger.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }

    /// Emits the arguments through the normal log path.
    ///
    /// Subject to gating: a disabled namespace (outside log-all mode)
    /// suppresses the call entirely, including observer notification.
    pub fn log<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let args = self.apply_formatting(collect_args(args));
        self.dispatch_raw(Severity::Log, args);
        self
    }

    /// Emits the arguments as a warning.
    ///
    /// Warnings carry a severity marker in the leading prefix segment and
    /// bypass gating when the always-log-warnings setting is enabled.
    pub fn warn<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let args = self.apply_formatting(collect_args(args));
        self.dispatch_raw(Severity::Warn, args);
        self
    }

    /// Emits the arguments as an error.
    ///
    /// Errors bypass gating by default (the always-log-errors setting
    /// defaults to true) and may append a filtered call-stack trace.
    pub fn error<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let args = self.apply_formatting(collect_args(args));
        self.dispatch_raw(Severity::Error, args);
        self
    }

    pub(crate) fn color(&self) -> Option<&str> {
        self.core.color.as_deref()
    }

    /// Routes already-decorated arguments into the dispatch pipeline.
    pub(crate) fn dispatch_raw(&self, severity: Severity, args: Vec<String>) {
        if let Some(registry) = self.core.registry.upgrade() {
            registry.dispatch(severity, &self.core.namespace, args);
        }
    }

    /// Splices the configured prefix and postfix onto an argument list.
    ///
    /// Returns the list unchanged (no reallocation) when neither is set.
    pub(crate) fn apply_formatting(&self, args: Vec<String>) -> Vec<String> {
        if self.core.prefix.is_empty() && self.core.postfix.is_empty() {
            return args;
        }
        let mut formatted = Vec::with_capacity(args.len() + 2);
        if !self.core.prefix.is_empty() {
            formatted.push(self.core.prefix.clone());
        }
        formatted.extend(args);
        if !self.core.postfix.is_empty() {
            formatted.push(self.core.postfix.clone());
        }
        formatted
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("namespace", &self.core.namespace)
            .field("enabled", &self.enabled())
            .finish_non_exhaustive()
    }
}

/// Display-formats a payload into the owned argument list used throughout
/// the pipeline.
pub(crate) fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    args.into_iter().map(|value| value.to_string()).collect()
}
