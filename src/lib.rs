//! src/lib.rs
//! Namespaced console logging with observer modules and a swappable sink.
//!
//! # Overview
//!
//! `nslog` maps string namespaces to logger instances held in a process-wide
//! registry. Components request a logger for their namespace with
//! [`get_logger`] (or the [`get_performance_logger`] and
//! [`get_buffered_logger`] variants) and emit through it; every emission
//! travels one shared pipeline that applies gating, a colorized namespace
//! tag, severity markers, observer fan-out, and a final write to the
//! configured sink.
//!
//! # Design
//!
//! * **One logger per namespace.** Factories are get-or-create: the first
//!   request's options win, later requests receive a handle to the same
//!   instance. Requesting an existing namespace as a different logger kind
//!   is an error.
//! * **Handles are cheap.** [`Logger`] and its variants are thin clones over
//!   shared state, so they can be stored, cloned, and passed across threads
//!   freely.
//! * **Severity is presentation.** `warn` and `error` differ from `log` only
//!   in their leading marker segment and their gating bypass settings; the
//!   emitted [`LogEvent`] does not carry a severity.
//! * **Everything downstream is swappable.** Observer modules registered
//!   with [`add_log_module`] see every event that passes gating, and
//!   [`set_log_output`] replaces the console sink wholesale.
//!
//! # Invariants
//!
//! * Exactly one logger instance exists per namespace for the lifetime of a
//!   registry.
//! * Observer modules are notified in registration order, before the sink
//!   write, and only for events that pass gating.
//! * Suppressed calls are suppressed entirely: no sink write, no module
//!   notification.
//! * [`set_log_all_mode`] overrides per-logger `enabled` flags without
//!   mutating them; leaving the mode restores prior behaviour exactly.
//!
//! # Errors
//!
//! Factory functions return [`LogError`]; the emission path itself is
//! infallible and best-effort.
//!
//! # Examples
//!
//! ```
//! use nslog::{LoggerOptions, log_args};
//!
//! let logger = nslog::get_logger(
//!     "transfer",
//!     LoggerOptions {
//!         color: Some(String::from("green")),
//!         ..LoggerOptions::default()
//!     },
//! )?;
//! logger.log(log_args!["sent", 3, "files"]);
//! logger.warn(["link is slow"]);
//! # Ok::<(), nslog::LogError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod api;
mod color;
mod config;
mod dispatch;
mod error;
mod event;
mod logger;
mod macros;
mod registry;
mod sink;
mod trace;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use api::{
    add_log_module, error, get_buffered_logger, get_logger, get_performance_logger, log,
    print_log_counts, set_log_all_mode, set_log_output, warn,
};
pub use color::colorize;
pub use config::LogSettings;
pub use error::LogError;
pub use event::{LogEvent, LogModule};
pub use logger::{
    BufferedLogger, BufferedLoggerOptions, Clock, Logger, LoggerOptions, PerformanceLogger,
    PerformanceLoggerOptions, SystemClock,
};
pub use registry::{LoggerEntry, LoggerKind, LoggerRegistry};
pub use sink::{ConsoleSink, LogSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingBridge;
