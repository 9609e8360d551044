//! Convenience macro for mixed-type argument lists.

/// Builds the `Vec<String>` argument list the logging functions accept from
/// values of differing [`Display`](std::fmt::Display) types.
///
/// The plain `IntoIterator` parameters require a homogeneous item type;
/// `log_args!` lifts that restriction by formatting each value eagerly.
///
/// # Examples
///
/// ```
/// use nslog::log_args;
///
/// let args = log_args!["processed", 42, "records in", 1.5, "s"];
/// assert_eq!(args[1], "42");
///
/// let empty = log_args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! log_args {
    [] => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    [$($value:expr),+ $(,)?] => {
        ::std::vec![$(::std::string::ToString::to_string(&$value)),+]
    };
}
