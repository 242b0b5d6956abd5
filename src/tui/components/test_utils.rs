//! Test utilities for TUI component tests.

/// Strips ANSI escape codes from a string.
///
/// Used in tests to compare rendered text without colour codes.
///
/// # Example
///
/// ```
/// use reviewdeck::tui::components::test_utils::strip_ansi_codes;
///
/// let coloured = "\x1b[32m✔\x1b[0m done";
/// assert_eq!(strip_ansi_codes(coloured), "✔ done");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;

    for ch in s.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            result.push(ch);
        }
    }

    result
}
