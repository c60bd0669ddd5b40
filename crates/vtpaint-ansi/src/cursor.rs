//! Cursor movement sequences.
//!
//! These only build strings; writing them to a terminal is up to the caller.

use crate::codes::{CSI, CURSOR_HIDE, CURSOR_SHOW};

/// Move the cursor up `n` lines.
pub fn cursor_up(n: u16) -> String {
    format!("{}{}A", CSI, n)
}

/// Move the cursor down `n` lines.
pub fn cursor_down(n: u16) -> String {
    format!("{}{}B", CSI, n)
}

/// Move the cursor forward `n` columns.
pub fn cursor_forward(n: u16) -> String {
    format!("{}{}C", CSI, n)
}

/// Move the cursor back `n` columns.
pub fn cursor_back(n: u16) -> String {
    format!("{}{}D", CSI, n)
}

/// Move the cursor to `row`, `col`. Coordinates are 1-based.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::cursor::cursor_position;
/// assert_eq!(cursor_position(10, 20), "\x1b[10;20H");
/// ```
pub fn cursor_position(row: u16, col: u16) -> String {
    format!("{}{};{}H", CSI, row, col)
}

/// Hide the cursor.
pub fn hide_cursor() -> &'static str {
    CURSOR_HIDE
}

/// Show the cursor.
pub fn show_cursor() -> &'static str {
    CURSOR_SHOW
}
