//! src/config.rs
//! Process-wide logging settings sourced from the environment.

use std::env;

/// Process-wide settings consulted by the dispatch pipeline.
///
/// The global registry reads these once from the environment when it is first
/// created (see [`LoggerRegistry::global`](crate::LoggerRegistry::global));
/// test harnesses construct them explicitly and pass them to
/// [`LoggerRegistry::new`](crate::LoggerRegistry::new).
///
/// Recognised environment variables:
///
/// | Variable | Field | Default |
/// |----------|-------|---------|
/// | `NSLOG_COLORS` | `colors_enabled` | `true` |
/// | `NSLOG_DEFAULT_COLOR` | `default_color` | `yellow` |
/// | `NSLOG_ALWAYS_LOG_WARNINGS` | `always_log_warnings` | `false` |
/// | `NSLOG_ALWAYS_LOG_ERRORS` | `always_log_errors` | `true` |
/// | `NSLOG_ERROR_TRACES` | `log_error_traces` | `false` |
///
/// Boolean variables accept `1`/`0`, `true`/`false`, `yes`/`no`, and
/// `on`/`off` (case-insensitive); unrecognised values keep the default.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogSettings {
    /// Whether namespace tags are wrapped in ANSI color escapes.
    pub colors_enabled: bool,
    /// Symbolic color applied to loggers that do not configure their own.
    pub default_color: String,
    /// When true, `warn` calls bypass gating and always emit.
    pub always_log_warnings: bool,
    /// When true, `error` calls bypass gating and always emit.
    ///
    /// Errors are stricter than warnings: this defaults to `true` so error
    /// diagnostics survive disabled namespaces unless explicitly opted out.
    pub always_log_errors: bool,
    /// When true, `error` calls append a filtered call-stack trace.
    pub log_error_traces: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            colors_enabled: true,
            default_color: String::from("yellow"),
            always_log_warnings: false,
            always_log_errors: true,
            log_error_traces: false,
        }
    }
}

impl LogSettings {
    /// Reads settings from the process environment.
    ///
    /// Unset or unparseable variables fall back to the documented defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            colors_enabled: env_bool("NSLOG_COLORS", defaults.colors_enabled),
            default_color: env::var("NSLOG_DEFAULT_COLOR").unwrap_or(defaults.default_color),
            always_log_warnings: env_bool(
                "NSLOG_ALWAYS_LOG_WARNINGS",
                defaults.always_log_warnings,
            ),
            always_log_errors: env_bool("NSLOG_ALWAYS_LOG_ERRORS", defaults.always_log_errors),
            log_error_traces: env_bool("NSLOG_ERROR_TRACES", defaults.log_error_traces),
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => parse_bool(&value, default),
        Err(_) => default,
    }
}

fn parse_bool(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
