//! src/dispatch.rs
//! The shared emission pipeline: gating, namespace tagging, severity
//! markers, observer fan-out, and the final sink write.

use crate::color::format_namespace;
use crate::event::LogEvent;
use crate::registry::LoggerRegistry;
use crate::trace;

/// Severity lane a call travels through the pipeline.
///
/// Severity affects the leading prefix segment and the gating bypass rules;
/// it is not carried on the emitted event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Severity {
    Log,
    Warn,
    Error,
}

impl Severity {
    /// Marker text joined into the leading prefix segment, if any.
    const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Log => None,
            Self::Warn => Some("⚠️ Warning:"),
            Self::Error => Some("🛑 Error!"),
        }
    }
}

impl LoggerRegistry {
    /// Runs one call through the full pipeline: gating, tagging, severity
    /// marking, trace annotation, then [`emit`](Self::emit).
    ///
    /// `namespace` may name a registered logger or be empty for anonymous
    /// calls; anonymous calls bypass gating entirely.
    pub(crate) fn dispatch(&self, severity: Severity, namespace: &str, args: Vec<String>) {
        let entry = self.entry(namespace);

        let allowed = match &entry {
            Some(entry) => {
                let bypass = match severity {
                    Severity::Log => false,
                    Severity::Warn => self.settings().always_log_warnings,
                    Severity::Error => self.settings().always_log_errors,
                };
                bypass || self.should_log(namespace, entry.base().enabled())
            }
            // Anonymous and unregistered namespaces have no enabled flag to
            // consult; they always emit.
            None => true,
        };
        if !allowed {
            return;
        }

        let color = entry.as_ref().and_then(|entry| entry.base().color());
        let tag = format_namespace(namespace, color, self.settings());

        let mut out = Vec::with_capacity(args.len() + 3);
        match severity.marker() {
            Some(marker) if tag.is_empty() => out.push(String::from(marker)),
            Some(marker) => out.push(format!("{tag} {marker}")),
            None if tag.is_empty() => {}
            None => out.push(tag),
        }
        out.extend(args);

        if severity == Severity::Error && self.settings().log_error_traces {
            out.push(String::from("\nAt:"));
            out.push(trace::call_stack());
        }

        self.emit(namespace, out);
    }

    /// Final stage: builds the event, notifies observer modules in
    /// registration order, then writes the arguments to the sink.
    ///
    /// Modules see exactly the argument list the sink receives. A panicking
    /// module propagates; modules are trusted in-process extensions.
    pub(crate) fn emit(&self, namespace: &str, args: Vec<String>) {
        let event = LogEvent {
            namespace: namespace.to_string(),
            args,
        };
        for module in self.modules() {
            module.on_log(&event);
        }
        self.sink().write(&event.args);
    }
}
