//! src/api.rs
//! Free-function surface over the process-wide registry.

use std::fmt;
use std::sync::Arc;

use crate::dispatch::Severity;
use crate::error::LogError;
use crate::event::LogModule;
use crate::logger::{
    BufferedLogger, BufferedLoggerOptions, Logger, LoggerOptions, PerformanceLogger,
    PerformanceLoggerOptions, collect_args,
};
use crate::registry::LoggerRegistry;
use crate::sink::LogSink;

/// Returns the plain logger registered under `namespace`, creating it on
/// first request.
///
/// See [`LoggerRegistry::get_logger`] for the get-or-create contract.
///
/// # Errors
///
/// Returns [`LogError::EmptyNamespace`] for an empty namespace and
/// [`LogError::KindMismatch`] when the namespace is already registered as a
/// different logger kind.
pub fn get_logger(namespace: &str, options: LoggerOptions) -> Result<Logger, LogError> {
    LoggerRegistry::global().get_logger(namespace, options)
}

/// Returns the performance logger registered under `namespace`, creating it
/// on first request.
///
/// # Errors
///
/// Same contract as [`get_logger`].
pub fn get_performance_logger(
    namespace: &str,
    options: PerformanceLoggerOptions,
) -> Result<PerformanceLogger, LogError> {
    LoggerRegistry::global().get_performance_logger(namespace, options)
}

/// Returns the buffered logger registered under `namespace`, creating it on
/// first request.
///
/// # Errors
///
/// Same contract as [`get_logger`].
pub fn get_buffered_logger(
    namespace: &str,
    options: BufferedLoggerOptions,
) -> Result<BufferedLogger, LogError> {
    LoggerRegistry::global().get_buffered_logger(namespace, options)
}

/// Logs through a registered namespace, or anonymously when
/// `namespace_or_first` names no registered logger.
///
/// For an unregistered first argument the call emits untagged with that
/// argument prepended to the payload; gating never applies.
pub fn log<I>(namespace_or_first: &str, args: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    dispatch_global(Severity::Log, namespace_or_first, args);
}

/// Warns through a registered namespace, or anonymously; see [`log`].
pub fn warn<I>(namespace_or_first: &str, args: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    dispatch_global(Severity::Warn, namespace_or_first, args);
}

/// Emits an error through a registered namespace, or anonymously; see
/// [`log`].
pub fn error<I>(namespace_or_first: &str, args: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    dispatch_global(Severity::Error, namespace_or_first, args);
}

fn dispatch_global<I>(severity: Severity, namespace_or_first: &str, args: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let registry = LoggerRegistry::global();
    let args = collect_args(args);
    if registry.entry(namespace_or_first).is_some() {
        // Prefix/postfix decoration belongs to instance calls; a free call
        // borrows only the namespace's tag, color, and gating.
        registry.dispatch(severity, namespace_or_first, args);
    } else {
        // Unregistered first argument: treat it as payload, not a namespace.
        let mut payload = Vec::with_capacity(args.len() + 1);
        payload.push(namespace_or_first.to_string());
        payload.extend(args);
        registry.dispatch(severity, "", payload);
    }
}

/// Registers an observer module on the process-wide registry.
///
/// Modules are notified in registration order for every event that passes
/// gating, before the sink write.
pub fn add_log_module(module: impl LogModule + 'static) {
    LoggerRegistry::global().add_module(Arc::new(module));
}

/// Prints the call-count report of every performance logger that opted in.
pub fn print_log_counts() {
    LoggerRegistry::global().print_log_counts();
}

/// Sets or clears the global log-all debug override on the process-wide
/// registry; see [`LoggerRegistry::set_log_all_mode`].
pub fn set_log_all_mode(enabled: bool, only_namespaces: Option<&[&str]>) {
    LoggerRegistry::global().set_log_all_mode(enabled, only_namespaces);
}

/// Replaces the process-wide output sink.
pub fn set_log_output(sink: impl LogSink + 'static) {
    LoggerRegistry::global().set_sink(Arc::new(sink));
}
