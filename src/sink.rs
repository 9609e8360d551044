//! Output sinks: the final destination for formatted argument lists.

use std::io::{self, Write};

/// Destination for the final argument list of an emitted event.
///
/// The registry holds exactly one sink at a time; replacing it via
/// [`set_log_output`](crate::set_log_output) swaps the previous sink out
/// wholesale (no stacking). Closures of shape `Fn(&[String])` implement this
/// trait, so a capture buffer is one line of test setup:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use nslog::{LogSettings, LoggerRegistry};
///
/// let registry = LoggerRegistry::new(LogSettings::default());
/// let records: Arc<Mutex<Vec<Vec<String>>>> = Arc::default();
/// let capture = Arc::clone(&records);
/// registry.set_sink(Arc::new(move |args: &[String]| {
///     capture.lock().unwrap().push(args.to_vec());
/// }));
/// ```
pub trait LogSink: Send + Sync {
    /// Writes one event's final argument list.
    ///
    /// Logging is best-effort: implementations must not panic when the
    /// underlying destination is unavailable.
    fn write(&self, args: &[String]);
}

impl<F> LogSink for F
where
    F: Fn(&[String]) + Send + Sync,
{
    fn write(&self, args: &[String]) {
        self(args);
    }
}

/// Default sink: writes the argument list space-joined to standard output,
/// one line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, args: &[String]) {
        let mut stdout = io::stdout().lock();
        // A closed stdout must not take the host process down.
        let _ = writeln!(stdout, "{}", args.join(" "));
    }
}
