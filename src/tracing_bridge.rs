//! Observer module forwarding events into the `tracing` ecosystem.

use crate::event::{LogEvent, LogModule};

/// Observer module that re-emits every event as a `tracing` event at info
/// level under the `nslog` target, with the namespace attached as a field.
///
/// Register it like any other module:
///
/// ```
/// use nslog::TracingBridge;
///
/// nslog::add_log_module(TracingBridge);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingBridge;

impl LogModule for TracingBridge {
    fn name(&self) -> &str {
        "tracing-bridge"
    }

    fn on_log(&self, event: &LogEvent) {
        tracing::info!(
            target: "nslog",
            namespace = %event.namespace,
            "{}",
            event.args.join(" ")
        );
    }
}
