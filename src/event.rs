//! Log events and the observer-module capability.

/// A single emitted log event.
///
/// Constructed fresh for every call that passes gating; carries the final
/// argument list exactly as it is handed to the output sink, including the
/// namespace tag and any severity marker. Events are passed by reference to
/// every registered [`LogModule`] and are not retained by the registry.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    /// Namespace the event was emitted under; empty for anonymous calls.
    pub namespace: String,
    /// Final argument list, in sink order.
    pub args: Vec<String>,
}

/// Observer notified of every successfully emitted log event.
///
/// Modules are registered once via
/// [`add_log_module`](crate::add_log_module) (there is no removal API) and
/// are notified in registration order, before the sink write. They only see
/// events that pass gating; calls suppressed by a disabled namespace never
/// reach a module.
pub trait LogModule: Send + Sync {
    /// Stable identifier for the module, used in diagnostics.
    fn name(&self) -> &str;

    /// Called once per emitted event, in registration order.
    fn on_log(&self, event: &LogEvent);
}
