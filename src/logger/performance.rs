//! Interval-profiling logger: per-id call counters and elapsed-time markers.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::{Duration, Instant};

use super::{Logger, LoggerOptions, collect_args};
use crate::dispatch::Severity;

/// Time source consulted when recording per-id timestamps.
///
/// The default [`SystemClock`] reads the monotonic wall clock; tests inject a
/// manual clock through [`PerformanceLogger::set_clock`] to make elapsed-time
/// markers deterministic.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Monotonic wall-clock [`Clock`], the default time source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Configuration accepted by
/// [`get_performance_logger`](crate::get_performance_logger).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceLoggerOptions {
    /// Base logger configuration (color, enabled, prefix, postfix).
    pub logger: LoggerOptions,
    /// Advisory marker readable via
    /// [`log_counts`](PerformanceLogger::log_counts). The aggregate
    /// [`print_log_counts`](crate::print_log_counts) report covers every
    /// performance logger regardless of this flag.
    pub log_counts: bool,
}

impl Default for PerformanceLoggerOptions {
    fn default() -> Self {
        Self {
            logger: LoggerOptions::default(),
            log_counts: true,
        }
    }
}

#[derive(Default)]
struct PerfState {
    counts: HashMap<String, u64>,
    times: HashMap<String, Instant>,
}

struct PerfShared {
    log_counts: bool,
    clock: RwLock<Arc<dyn Clock>>,
    state: Mutex<PerfState>,
}

/// Logger that profiles repeated checkpoints identified by their first
/// argument.
///
/// Each distinct id cycles independently through "never seen" and "seen at
/// time T": the first `log` call for an id emits without a timing marker,
/// every later call appends `"(<elapsed>ms)"` measured since the previous
/// call for the same id. Both the counter and timestamp maps grow with the
/// number of distinct ids and are never evicted; ids are expected to be a
/// small fixed set of checkpoint labels.
#[derive(Clone)]
pub struct PerformanceLogger {
    base: Logger,
    shared: Arc<PerfShared>,
}

impl PerformanceLogger {
    pub(crate) fn new(base: Logger, options: &PerformanceLoggerOptions) -> Self {
        Self {
            base,
            shared: Arc::new(PerfShared {
                log_counts: options.log_counts,
                clock: RwLock::new(Arc::new(SystemClock)),
                state: Mutex::new(PerfState::default()),
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

    /// Returns the `log_counts` option this logger was created with.
    #[must_use]
    pub fn log_counts(&self) -> bool {
        self.shared.log_counts
    }

    /// Replaces the time source. Intended for deterministic tests.
    pub fn set_clock(&self, clock: Arc<dyn Clock>) {
        *self
            .shared
            .clock
            .write()
            .unwrap_or_else(PoisonError::into_inner) = clock;
    }

    /// Emits the arguments, profiling the id given by the first argument.
    ///
    /// Records the current timestamp for the id, increments its call count,
    /// and appends an elapsed-time marker when the id has been logged
    /// before. An empty argument list is a no-op.
    pub fn log<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let args = collect_args(args);
        let Some(id) = args.first().cloned() else {
            return self;
        };
        let elapsed = self.record_time(&id);
        self.increment(&id);

        let mut formatted = self.base.apply_formatting(args);
        if let Some(elapsed) = elapsed {
            formatted.push(format!("({}ms)", elapsed.as_millis()));
        }
        self.base.dispatch_raw(Severity::Log, formatted);
        self
    }

    /// Emits the arguments and counts the id without touching timestamps.
    ///
    /// Never appends a timing marker; useful for counting events that are
    /// not interval checkpoints.
    pub fn log_incr<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let args = collect_args(args);
        let Some(id) = args.first().cloned() else {
            return self;
        };
        self.increment(&id);
        self.base
            .dispatch_raw(Severity::Log, self.base.apply_formatting(args));
        self
    }

    /// Increments the call count for `id` without emitting; returns the new
    /// count.
    pub fn incr(&self, id: &str) -> u64 {
        self.increment(id)
    }

    /// Records the current timestamp for `id` without emitting; returns the
    /// elapsed time since the previous call for that id, if any.
    pub fn time(&self, id: &str) -> Option<Duration> {
        self.record_time(id)
    }

    /// Emits the warnings path for this namespace; see [`Logger::warn`].
    pub fn warn<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.base.warn(args);
        self
    }

    /// Emits the error path for this namespace; see [`Logger::error`].
    pub fn error<I>(&self, args: I) -> &Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.base.error(args);
        self
    }

    /// Emits a formatted per-id call-count report through the normal log
    /// path.
    ///
    /// Ids are sorted by descending call count (tie order is unspecified),
    /// one `"<count>:\t<id>"` row per id, framed by separator lines. Because
    /// the report goes through `log` dispatch it is subject to gating,
    /// coloring, and namespace tagging like any other emission.
    pub fn print_counts(&self) -> &Self {
        let mut entries: Vec<(String, u64)> = {
            let state = self.state_lock();
            state
                .counts
                .iter()
                .map(|(id, count)| (id.clone(), *count))
                .collect()
        };
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        let mut lines = Vec::with_capacity(entries.len() + 3);
        lines.push(String::from("Log call counts:"));
        lines.push("─".repeat(60));
        lines.extend(
            entries
                .into_iter()
                .map(|(id, count)| format!("{count}:\t{id}")),
        );
        lines.push("─".repeat(60));

        self.base.dispatch_raw(Severity::Log, vec![lines.join("\n")]);
        self
    }

    /// Clears all counters and timestamps.
    pub fn reset(&self) -> &Self {
        let mut state = self.state_lock();
        state.counts.clear();
        state.times.clear();
        self
    }

    fn increment(&self, id: &str) -> u64 {
        let mut state = self.state_lock();
        let count = state.counts.entry(id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    fn record_time(&self, id: &str) -> Option<Duration> {
        let now = self
            .shared
            .clock
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .now();
        let mut state = self.state_lock();
        let previous = state.times.insert(id.to_string(), now);
        previous.map(|prev| now.duration_since(prev))
    }

    fn state_lock(&self) -> MutexGuard<'_, PerfState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PerformanceLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerformanceLogger")
            .field("namespace", &self.base.namespace())
            .field("log_counts", &self.shared.log_counts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Weak;

    fn detached() -> PerformanceLogger {
        let base = Logger::new("perf", LoggerOptions::default(), Weak::new());
        PerformanceLogger::new(base, &PerformanceLoggerOptions::default())
    }

    struct ManualClock {
        origin: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                origin: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + *self.offset.lock().unwrap()
        }
    }

    #[test]
    fn incr_returns_running_count_per_id() {
        let perf = detached();
        assert_eq!(perf.incr("a"), 1);
        assert_eq!(perf.incr("a"), 2);
        assert_eq!(perf.incr("b"), 1);
        assert_eq!(perf.incr("a"), 3);
    }

    #[test]
    fn time_reports_elapsed_since_previous_call() {
        let perf = detached();
        let clock = Arc::new(ManualClock::new());
        perf.set_clock(clock.clone());

        assert_eq!(perf.time("checkpoint"), None);
        clock.advance(Duration::from_millis(250));
        assert_eq!(perf.time("checkpoint"), Some(Duration::from_millis(250)));
        clock.advance(Duration::from_millis(40));
        assert_eq!(perf.time("checkpoint"), Some(Duration::from_millis(40)));
    }

    #[test]
    fn ids_track_time_independently() {
        let perf = detached();
        let clock = Arc::new(ManualClock::new());
        perf.set_clock(clock.clone());

        assert_eq!(perf.time("a"), None);
        clock.advance(Duration::from_millis(100));
        assert_eq!(perf.time("b"), None);
        clock.advance(Duration::from_millis(100));
        assert_eq!(perf.time("a"), Some(Duration::from_millis(200)));
        assert_eq!(perf.time("b"), Some(Duration::from_millis(100)));
    }

    #[test]
    fn reset_clears_counts_and_times() {
        let perf = detached();
        perf.incr("a");
        perf.time("a");
        perf.reset();
        assert_eq!(perf.incr("a"), 1);
        assert_eq!(perf.time("a"), None);
    }

    #[test]
    fn empty_payload_is_a_no_op() {
        let perf = detached();
        perf.log(Vec::<String>::new());
        assert_eq!(perf.incr("anything"), 1);
    }
}
