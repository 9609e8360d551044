//! src/color.rs
//! Symbolic color names and namespace-tag formatting.

use colored::{Color, Colorize};

use crate::config::LogSettings;

/// Wraps `text` in the ANSI escape sequence for the symbolic color `name`.
///
/// Color names are the ones `colored` understands (`"red"`, `"green"`,
/// `"yellow"`, `"bright blue"`, ...); unrecognised names fall back to white.
/// Resolution happens here, at emission time, so a logger created before the
/// terminal capabilities are known still picks up the right behaviour.
#[must_use]
pub fn colorize(name: &str, text: &str) -> String {
    text.color(Color::from(name)).to_string()
}

/// Renders the leading `"<namespace>:"` tag for a namespaced emission.
///
/// Loggers without an explicit color use the settings' default color. When
/// coloring is disabled the plain tag is returned unchanged.
pub(crate) fn format_namespace(
    namespace: &str,
    color: Option<&str>,
    settings: &LogSettings,
) -> String {
    if namespace.is_empty() {
        return String::new();
    }
    let tag = format!("{namespace}:");
    if settings.colors_enabled {
        colorize(color.unwrap_or(&settings.default_color), &tag)
    } else {
        tag
    }
}
