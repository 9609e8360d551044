//! Error types surfaced by the logger factory functions.

use thiserror::Error;

use crate::registry::LoggerKind;

/// Errors returned by the `get_*_logger` factory functions.
///
/// Dispatching itself is best-effort and never fails; the only fallible
/// operations are the factories, which validate their namespace argument and
/// refuse to hand out a handle of the wrong kind for an already-registered
/// namespace.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LogError {
    /// An empty namespace was passed to a logger factory.
    #[error("a non-empty namespace must be supplied to {factory}")]
    EmptyNamespace {
        /// Name of the factory function that rejected the call.
        factory: &'static str,
    },
    /// The namespace is already registered under a different logger kind.
    ///
    /// One logger instance exists per namespace for the lifetime of the
    /// process, so a namespace first registered as (say) a buffered logger
    /// cannot later be requested as a performance logger.
    #[error("namespace {namespace:?} is already registered as a {existing} logger")]
    KindMismatch {
        /// The contested namespace.
        namespace: String,
        /// Kind of the logger already stored for that namespace.
        existing: LoggerKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_namespace_names_the_factory() {
        let err = LogError::EmptyNamespace {
            factory: "get_logger",
        };
        assert_eq!(
            err.to_string(),
            "a non-empty namespace must be supplied to get_logger"
        );
    }

    #[test]
    fn kind_mismatch_reports_existing_kind() {
        let err = LogError::KindMismatch {
            namespace: String::from("svc"),
            existing: LoggerKind::Buffered,
        };
        assert_eq!(
            err.to_string(),
            "namespace \"svc\" is already registered as a buffered logger"
        );
    }
}
