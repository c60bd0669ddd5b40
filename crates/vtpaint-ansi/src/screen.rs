//! Screen and line clearing sequences.

use crate::codes;

/// Clear the entire screen and move the cursor to the top-left corner.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::screen::clear_screen;
/// assert_eq!(clear_screen(), "\x1b[2J\x1b[H");
/// ```
pub fn clear_screen() -> String {
    format!("{}{}", codes::CLEAR_SCREEN, codes::CURSOR_HOME)
}

/// Clear the entire current line.
pub fn clear_line() -> &'static str {
    codes::CLEAR_LINE
}

/// Clear from the cursor to the beginning of the line.
pub fn clear_line_left() -> &'static str {
    codes::CLEAR_LINE_LEFT
}

/// Clear from the cursor to the end of the line.
pub fn clear_line_right() -> &'static str {
    codes::CLEAR_LINE_RIGHT
}

/// Switch to the alternate screen buffer.
pub fn alt_screen_buffer() -> &'static str {
    codes::ALT_SCREEN_ON
}

/// Switch back to the main screen buffer.
pub fn normal_screen_buffer() -> &'static str {
    codes::ALT_SCREEN_OFF
}
