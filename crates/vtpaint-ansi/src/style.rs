//! Composable text styles.
//!
//! A [`Style`] is a plain value: every setter consumes it and returns a copy
//! with one field replaced, so styles can be shared and extended freely.
//!
//! The [`StylePair`] constants expose the matching on/off codes for callers
//! that toggle attributes by hand instead of going through [`Style::render`].

use std::fmt;

use crate::codes;
use crate::color::Color;

/// A style pair consisting of (enable_code, disable_code).
///
/// ```
/// use vtpaint_ansi::style::BOLD;
/// let text = format!("{}bold{} normal", BOLD.0, BOLD.1);
/// assert_eq!(text, "\x1b[1mbold\x1b[22m normal");
/// ```
pub type StylePair = (&'static str, &'static str);

/// Bold formatting pair.
pub const BOLD: StylePair = (codes::BOLD_ON, codes::BOLD_OFF);

/// Faint formatting pair.
pub const FAINT: StylePair = (codes::FAINT_ON, codes::FAINT_OFF);

/// Italic formatting pair.
pub const ITALIC: StylePair = (codes::ITALIC_ON, codes::ITALIC_OFF);

/// Underline formatting pair.
pub const UNDERLINE: StylePair = (codes::UNDERLINE_ON, codes::UNDERLINE_OFF);

/// Blink formatting pair.
pub const BLINK: StylePair = (codes::BLINK_ON, codes::BLINK_OFF);

/// Reverse video formatting pair.
pub const REVERSE: StylePair = (codes::REVERSE_ON, codes::REVERSE_OFF);

/// Hidden text formatting pair.
pub const HIDDEN: StylePair = (codes::HIDDEN_ON, codes::HIDDEN_OFF);

/// Strikethrough formatting pair.
pub const STRIKETHROUGH: StylePair = (codes::STRIKETHROUGH_ON, codes::STRIKETHROUGH_OFF);

/// Represents a complete text style with colors and attributes.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::{Color, Style};
///
/// let warning = Style::new().foreground(Color::yellow()).bold(true);
/// assert_eq!(warning.render("careful"), "\x1b[33m\x1b[1mcareful\x1b[0m");
///
/// // Plain styles leave text untouched
/// assert_eq!(Style::new().render("plain"), "plain");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    faint: bool,
    italic: bool,
    underline: bool,
    blink: bool,
    reverse: bool,
    hidden: bool,
    strikethrough: bool,
}

impl Style {
    /// Create a new plain style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    ///
    /// Any color counts as set, including [`Color::None`], so the rendered
    /// text is still followed by a reset.
    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable or disable bold text.
    #[must_use]
    pub fn bold(mut self, enabled: bool) -> Self {
        self.bold = enabled;
        self
    }

    /// Enable or disable faint (dim) text.
    #[must_use]
    pub fn faint(mut self, enabled: bool) -> Self {
        self.faint = enabled;
        self
    }

    /// Enable or disable italic text.
    #[must_use]
    pub fn italic(mut self, enabled: bool) -> Self {
        self.italic = enabled;
        self
    }

    /// Enable or disable underlined text.
    #[must_use]
    pub fn underline(mut self, enabled: bool) -> Self {
        self.underline = enabled;
        self
    }

    /// Enable or disable blinking text.
    #[must_use]
    pub fn blink(mut self, enabled: bool) -> Self {
        self.blink = enabled;
        self
    }

    /// Enable or disable reverse video.
    #[must_use]
    pub fn reverse(mut self, enabled: bool) -> Self {
        self.reverse = enabled;
        self
    }

    /// Enable or disable hidden text.
    #[must_use]
    pub fn hidden(mut self, enabled: bool) -> Self {
        self.hidden = enabled;
        self
    }

    /// Enable or disable strikethrough text.
    #[must_use]
    pub fn strikethrough(mut self, enabled: bool) -> Self {
        self.strikethrough = enabled;
        self
    }

    /// Foreground color, if one was set.
    pub fn fg(&self) -> Option<Color> {
        self.fg
    }

    /// Background color, if one was set.
    pub fn bg(&self) -> Option<Color> {
        self.bg
    }

    /// Whether bold is on.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Whether faint is on.
    pub fn is_faint(&self) -> bool {
        self.faint
    }

    /// Whether italic is on.
    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Whether underline is on.
    pub fn is_underline(&self) -> bool {
        self.underline
    }

    /// Whether blink is on.
    pub fn is_blink(&self) -> bool {
        self.blink
    }

    /// Whether reverse video is on.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Whether hidden text is on.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether strikethrough is on.
    pub fn is_strikethrough(&self) -> bool {
        self.strikethrough
    }

    /// Returns `true` when no color is set and every attribute is off.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.faint
            && !self.italic
            && !self.underline
            && !self.blink
            && !self.reverse
            && !self.hidden
            && !self.strikethrough
    }

    /// Convert to the escape sequence prelude for this style.
    ///
    /// Codes are emitted in a fixed order: foreground, background, then bold,
    /// faint, italic, underline, blink, reverse, hidden, strikethrough. A
    /// plain style yields an empty string.
    pub fn to_ansi(&self) -> String {
        if self.is_plain() {
            return String::new();
        }

        let mut out = String::with_capacity(20);

        if let Some(fg) = self.fg {
            out.push_str(&fg.foreground_sequence());
        }
        if let Some(bg) = self.bg {
            out.push_str(&bg.background_sequence());
        }

        let attributes = [
            (self.bold, codes::BOLD_ON),
            (self.faint, codes::FAINT_ON),
            (self.italic, codes::ITALIC_ON),
            (self.underline, codes::UNDERLINE_ON),
            (self.blink, codes::BLINK_ON),
            (self.reverse, codes::REVERSE_ON),
            (self.hidden, codes::HIDDEN_ON),
            (self.strikethrough, codes::STRIKETHROUGH_ON),
        ];
        for (_, code) in attributes.iter().filter(|(enabled, _)| *enabled) {
            out.push_str(code);
        }

        out
    }

    /// Wrap `text` in this style followed by a full reset.
    ///
    /// Plain styles return `text` unchanged, without any escape bytes.
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        format!("{}{}{}", self.to_ansi(), text, codes::RESET)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ansi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_pairs() {
        assert_eq!(BOLD.0, "\x1b[1m");
        assert_eq!(BOLD.1, "\x1b[22m");
        assert_eq!(ITALIC.0, "\x1b[3m");
        assert_eq!(ITALIC.1, "\x1b[23m");
        assert_eq!(HIDDEN, ("\x1b[8m", "\x1b[28m"));
    }

    #[test]
    fn test_plain_renders_unchanged() {
        let style = Style::new();
        assert!(style.is_plain());
        assert_eq!(style.to_ansi(), "");
        assert_eq!(style.render("Hello"), "Hello");
    }

    #[test]
    fn test_red_foreground() {
        let style = Style::new().foreground(Color::red());
        assert_eq!(style.render("Hello"), "\x1b[31mHello\x1b[0m");
    }

    #[test]
    fn test_bold_italic() {
        let style = Style::new().bold(true).italic(true);
        assert_eq!(style.render("World"), "\x1b[1m\x1b[3mWorld\x1b[0m");
    }

    #[test]
    fn test_colors_then_attributes() {
        let style = Style::new()
            .foreground(Color::red())
            .background(Color::blue())
            .underline(true);
        assert_eq!(style.render("Test"), "\x1b[31m\x1b[44m\x1b[4mTest\x1b[0m");
    }

    #[test]
    fn test_turn_off_returns_to_plain() {
        let style = Style::new().bold(true).bold(false);
        assert!(style.is_plain());
        assert_eq!(style.render("Plain"), "Plain");
    }

    #[test]
    fn test_hidden() {
        let style = Style::new().hidden(true);
        assert_eq!(style.render("Secret"), "\x1b[8mSecret\x1b[0m");
    }

    #[test]
    fn test_full_emission_order() {
        let style = Style::new()
            .strikethrough(true)
            .hidden(true)
            .reverse(true)
            .blink(true)
            .underline(true)
            .italic(true)
            .faint(true)
            .bold(true)
            .background(Color::indexed(17))
            .foreground(Color::rgb(1, 2, 3));
        assert_eq!(
            style.to_ansi(),
            "\x1b[38;2;1;2;3m\x1b[48;5;17m\x1b[1m\x1b[2m\x1b[3m\x1b[4m\x1b[5m\x1b[7m\x1b[8m\x1b[9m"
        );
    }

    #[test]
    fn test_setters_leave_original_untouched() {
        let base = Style::new().foreground(Color::green());
        let bold = base.bold(true);
        assert!(!base.is_bold());
        assert!(bold.is_bold());
        assert_eq!(bold.fg(), Some(Color::green()));
        assert_eq!(base.render("x"), "\x1b[32mx\x1b[0m");
    }

    #[test]
    fn test_later_setter_overwrites() {
        let style = Style::new()
            .foreground(Color::red())
            .foreground(Color::cyan());
        assert_eq!(style.render("x"), "\x1b[36mx\x1b[0m");
    }

    #[test]
    fn test_no_color_still_counts_as_set() {
        let style = Style::new().background(Color::None);
        assert!(!style.is_plain());
        assert_eq!(style.to_ansi(), "");
        assert_eq!(style.render("x"), "x\x1b[0m");
    }

    #[test]
    fn test_display_matches_to_ansi() {
        let style = Style::new().foreground(Color::yellow()).blink(true);
        assert_eq!(style.to_string(), style.to_ansi());
        assert_eq!(format!("{}", Style::new()), "");
    }
}
