//! ANSI escape code constants.
//!
//! This module provides the raw escape sequences for attributes,
//! the 16-color palette, and fixed cursor/screen commands.

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Bold on.
pub const BOLD_ON: &str = "\x1b[1m";

/// Bold off (normal intensity).
pub const BOLD_OFF: &str = "\x1b[22m";

/// Faint/dim text on.
pub const FAINT_ON: &str = "\x1b[2m";

/// Faint/dim text off (normal intensity, same code as bold off).
pub const FAINT_OFF: &str = "\x1b[22m";

/// Italic on.
pub const ITALIC_ON: &str = "\x1b[3m";

/// Italic off.
pub const ITALIC_OFF: &str = "\x1b[23m";

/// Underline on.
pub const UNDERLINE_ON: &str = "\x1b[4m";

/// Underline off.
pub const UNDERLINE_OFF: &str = "\x1b[24m";

/// Slow blink on.
pub const BLINK_ON: &str = "\x1b[5m";

/// Blink off.
pub const BLINK_OFF: &str = "\x1b[25m";

/// Reverse video on.
pub const REVERSE_ON: &str = "\x1b[7m";

/// Reverse video off.
pub const REVERSE_OFF: &str = "\x1b[27m";

/// Hidden/concealed text on.
pub const HIDDEN_ON: &str = "\x1b[8m";

/// Hidden/concealed text off.
pub const HIDDEN_OFF: &str = "\x1b[28m";

/// Strikethrough on.
pub const STRIKETHROUGH_ON: &str = "\x1b[9m";

/// Strikethrough off.
pub const STRIKETHROUGH_OFF: &str = "\x1b[29m";

// Foreground, standard palette
pub const FG_BLACK: &str = "\x1b[30m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_WHITE: &str = "\x1b[37m";

// Foreground, bright palette
pub const FG_BRIGHT_BLACK: &str = "\x1b[90m";
pub const FG_BRIGHT_RED: &str = "\x1b[91m";
pub const FG_BRIGHT_GREEN: &str = "\x1b[92m";
pub const FG_BRIGHT_YELLOW: &str = "\x1b[93m";
pub const FG_BRIGHT_BLUE: &str = "\x1b[94m";
pub const FG_BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const FG_BRIGHT_CYAN: &str = "\x1b[96m";
pub const FG_BRIGHT_WHITE: &str = "\x1b[97m";

// Background, standard palette
pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";

// Background, bright palette
pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
pub const BG_BRIGHT_RED: &str = "\x1b[101m";
pub const BG_BRIGHT_GREEN: &str = "\x1b[102m";
pub const BG_BRIGHT_YELLOW: &str = "\x1b[103m";
pub const BG_BRIGHT_BLUE: &str = "\x1b[104m";
pub const BG_BRIGHT_MAGENTA: &str = "\x1b[105m";
pub const BG_BRIGHT_CYAN: &str = "\x1b[106m";
pub const BG_BRIGHT_WHITE: &str = "\x1b[107m";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Clear the whole current line.
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Clear from the start of the line to the cursor.
pub const CLEAR_LINE_LEFT: &str = "\x1b[1K";

/// Clear from the cursor to the end of the line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[0K";

/// Switch to the alternate screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Switch back to the main screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Create a 256-color foreground escape sequence.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::codes::fg_indexed;
/// assert_eq!(fg_indexed(208), "\x1b[38;5;208m");
/// ```
pub fn fg_indexed(index: u8) -> String {
    format!("{}38;5;{}m", CSI, index)
}

/// Create a 256-color background escape sequence.
pub fn bg_indexed(index: u8) -> String {
    format!("{}48;5;{}m", CSI, index)
}

/// Create a 24-bit foreground color escape sequence.
///
/// # Arguments
///
/// * `r` - Red component (0-255)
/// * `g` - Green component (0-255)
/// * `b` - Blue component (0-255)
///
/// # Example
///
/// ```
/// use vtpaint_ansi::codes::fg_rgb;
/// let red = fg_rgb(255, 0, 0);
/// assert_eq!(red, "\x1b[38;2;255;0;0m");
/// ```
pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("{}38;2;{}m", CSI, rgb_string(r, g, b))
}

/// Create a 24-bit background color escape sequence.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::codes::bg_rgb;
/// let blue_bg = bg_rgb(0, 0, 255);
/// assert_eq!(blue_bg, "\x1b[48;2;0;0;255m");
/// ```
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("{}48;2;{}m", CSI, rgb_string(r, g, b))
}

/// Format RGB values as semicolon-separated string.
fn rgb_string(r: u8, g: u8, b: u8) -> String {
    format!("{};{};{}", r, g, b)
}
