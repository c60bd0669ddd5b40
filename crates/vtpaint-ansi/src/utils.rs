//! Escape sequence stripping and measurement.
//!
//! Only CSI sequences of the form `ESC [ <digits and ;> <letter>` are
//! recognized. OSC strings, private-mode sequences such as `ESC[?25l`, and
//! other escape forms pass through untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for the CSI sequences this crate recognizes.
pub const CSI_PATTERN: &str = r"\x1b\[[0-9;]*[a-zA-Z]";

static CSI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(CSI_PATTERN).unwrap());

/// Remove all CSI escape sequences from text.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::utils::strip;
/// assert_eq!(strip("\x1b[31m\x1b[1mBold Red\x1b[0m"), "Bold Red");
/// assert_eq!(strip("Move\x1b[1AUp"), "MoveUp");
/// ```
pub fn strip(text: &str) -> String {
    CSI_RE.replace_all(text, "").into_owned()
}

/// Count the characters left after [`strip`].
///
/// This is a count of Unicode scalar values, not terminal columns: wide
/// East Asian characters, combining marks and emoji each count as one.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("\x1b[32m世界\x1b[0m"), 2);
/// ```
pub fn visible_length(text: &str) -> usize {
    if !contains_codes(text) {
        return text.chars().count();
    }
    strip(text).chars().count()
}

/// Extract every recognized escape sequence from text, in order.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::utils::extract_codes;
/// let codes = extract_codes("\x1b[1mBold\x1b[0m");
/// assert_eq!(codes, vec!["\x1b[1m", "\x1b[0m"]);
/// ```
pub fn extract_codes(text: &str) -> Vec<&str> {
    CSI_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Check whether text contains any recognized escape sequence.
pub fn contains_codes(text: &str) -> bool {
    text.contains('\x1b') && CSI_RE.is_match(text)
}
