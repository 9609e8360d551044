//! Deferred-flush logger: queues records and replays them on demand.

use std::fmt;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Logger, LoggerOptions, collect_args};
use crate::dispatch::Severity;

/// Default pending-record capacity before an automatic flush.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 1000;

/// Configuration accepted by
/// [`get_buffered_logger`](crate::get_buffered_logger).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferedLoggerOptions {
    /// Base logger configuration (color, enabled, prefix, postfix).
    pub logger: LoggerOptions,
    /// Pending-record count that triggers an automatic flush.
    pub max_buffer_size: usize,
}

impl Default for BufferedLoggerOptions {
    fn default() -> Self {
        Self {
            logger: LoggerOptions::default(),
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}

struct BufferedShared {
    max_buffer_size: usize,
    buffer: Mutex<Vec<Vec<String>>>,
}

/// Logger that queues `log` calls instead of emitting them immediately.
///
/// Records accumulate until [`flush`](Self::flush) replays them through the
/// normal dispatch path in insertion order, or [`clear`](Self::clear) drops
/// them silently. When the pending count reaches the configured maximum, the
/// next `log` call first emits a warning through this logger's own `warn`
/// path, then force-flushes, then appends the new record - the triggering
/// call is always retained.
///
/// Buffering and interval profiling are independent capabilities: flushed
/// records never pass through timing or counting logic.
#[derive(Clone)]
pub struct BufferedLogger {
    base: Logger,
    shared: Arc<BufferedShared>,
}

impl BufferedLogger {
    pub(crate) fn new(base: Logger, options: &BufferedLoggerOptions) -> Self {
        Self {
            base,
            shared: Arc::new(BufferedShared {
                max_buffer_size: options.max_buffer_size,
                buffer: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Returns the underlying namespace logger handle.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.base
    }

    /// Returns the namespace this logger was registered under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.base.namespace()
    }

    /// Reports whether `log` calls currently pass gating in normal mode.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.base.enabled()
    }

    /// Enables or disables this namespace's `log` output.
    pub fn set_enabled(&self, enabled: bool) -> &Self {
        self.base.set_enabled(enabled);
        self
    }

    /// Returns the configured automatic-flush threshold.
    #[must_use]
    pub fn max_buffer_size(&self) -> usize {
        self.shared.max_buffer_size
    }

    /// Queues the raw arguments instead of emitting them.
    ///
    /// Records are buffered undecorated; the configured prefix and postfix
    /// apply only to the immediate `warn` and `error` paths, never to
    /// buffered records. Overflow is handled before the append: a full
    /// buffer emits a warning and force-flushes, so the new record always
    /// ends up queued.
    pub fn log<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let record = collect_args(args);
        if self.buffer_size() >= self.shared.max_buffer_size {
            self.base.warn(["Buffer overflow: flushing automatically"]);
            self.flush();
        }
        self.buffer_lock().push(record);
        self
    }

    /// Emits the warnings path immediately; warnings are never buffered.
    pub fn warn<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.base.warn(args);
        self
    }

    /// Emits the error path immediately; errors are never buffered.
    pub fn error<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.base.error(args);
        self
    }

    /// Replays every pending record through the normal log dispatch path in
    /// insertion order, then empties the buffer.
    ///
    /// Replay is subject to gating at flush time, like any other emission.
    pub fn flush(&self) -> &Self {
        let records = mem::take(&mut *self.buffer_lock());
        for record in records {
            self.base.dispatch_raw(Severity::Log, record);
        }
        self
    }

    /// Discards all pending records without emitting them.
    pub fn clear(&self) -> &Self {
        self.buffer_lock().clear();
        self
    }

    /// Returns the current pending-record count.
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_lock().len()
    }

    fn buffer_lock(&self) -> MutexGuard<'_, Vec<Vec<String>>> {
        self.shared
            .buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for BufferedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedLogger")
            .field("namespace", &self.base.namespace())
            .field("buffer_size", &self.buffer_size())
            .field("max_buffer_size", &self.shared.max_buffer_size)
            .finish_non_exhaustive()
    }
}
