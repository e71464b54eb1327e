/// Collapse every run of whitespace (newlines included) into a single space
/// and strip leading and trailing whitespace.
///
/// Only used to build the relaxed lookup key; the exact key always keeps the
/// source text untouched.
///
/// # Examples
///
/// ```
/// use tsmerge::core::normalize;
///
/// assert_eq!(normalize("Hello\n    World"), "Hello World");
/// assert_eq!(normalize("  \t\n "), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
