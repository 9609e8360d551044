//! Call-stack capture for error-trace annotation.

use std::backtrace::Backtrace;

// Frames from the logging pipeline itself and from runtime plumbing carry no
// information about the call site that raised the error.
const EXCLUDED_FRAME_KEYWORDS: &[&str] = &[
    "nslog::",
    "std::",
    "core::",
    "__rust",
    "rust_begin",
    "/rustc/",
];

/// Captures the current call stack as a formatted string with internal and
/// runtime frames filtered out.
///
/// Returns an empty string when backtraces are unavailable on the platform.
pub(crate) fn call_stack() -> String {
    let captured = Backtrace::force_capture().to_string();
    captured
        .lines()
        .filter(|line| {
            !EXCLUDED_FRAME_KEYWORDS
                .iter()
                .any(|keyword| line.contains(keyword))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_stack_filters_internal_frames() {
        let stack = call_stack();
        assert!(!stack.contains("nslog::trace"));
        assert!(!stack.contains("std::backtrace"));
    }
}
