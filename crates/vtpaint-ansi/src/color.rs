//! Terminal color model.
//!
//! A [`Color`] is one of four encodings, each able to render itself as a
//! foreground or background escape sequence:
//!
//! - [`Color::None`] - no color, renders as an empty string
//! - [`Color::Basic`] - one of the 16 standard/bright palette entries
//! - [`Color::Indexed`] - an entry of the 256-color palette
//! - [`Color::Rgb`] - a 24-bit true color

use std::fmt;
use std::str::FromStr;

use vtpaint_core::ColorError;

use crate::codes;

/// A 4-bit palette entry with its precomputed foreground/background codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasicColor {
    fg: &'static str,
    bg: &'static str,
}

impl BasicColor {
    /// The foreground escape sequence, e.g. `\x1b[31m` for red.
    pub fn fg(&self) -> &'static str {
        self.fg
    }

    /// The background escape sequence, e.g. `\x1b[41m` for red.
    pub fn bg(&self) -> &'static str {
        self.bg
    }
}

/// A color that can be rendered to the terminal.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::Color;
///
/// assert_eq!(Color::red().foreground_sequence(), "\x1b[31m");
/// assert_eq!(Color::indexed(208).background_sequence(), "\x1b[48;5;208m");
/// assert_eq!(Color::hex("#F0A"), Color::rgb(255, 0, 170));
/// assert_eq!(Color::hex("nope"), Color::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No color; renders nothing.
    #[default]
    None,
    /// Standard or bright 16-color palette entry.
    Basic(BasicColor),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit true color.
    Rgb { r: u8, g: u8, b: u8 },
}

macro_rules! basic_colors {
    ($($fn_name:ident => $name:literal, $fg:ident, $bg:ident;)*) => {
        impl Color {
            $(
                #[doc = concat!("The `", $name, "` palette color.")]
                pub const fn $fn_name() -> Self {
                    Color::Basic(BasicColor {
                        fg: codes::$fg,
                        bg: codes::$bg,
                    })
                }
            )*
        }

        /// The 16 palette colors with their names, standard colors first.
        pub const BASIC_PALETTE: [(&str, Color); 16] = [$(($name, Color::$fn_name()),)*];
    };
}

basic_colors! {
    black => "black", FG_BLACK, BG_BLACK;
    red => "red", FG_RED, BG_RED;
    green => "green", FG_GREEN, BG_GREEN;
    yellow => "yellow", FG_YELLOW, BG_YELLOW;
    blue => "blue", FG_BLUE, BG_BLUE;
    magenta => "magenta", FG_MAGENTA, BG_MAGENTA;
    cyan => "cyan", FG_CYAN, BG_CYAN;
    white => "white", FG_WHITE, BG_WHITE;
    bright_black => "bright-black", FG_BRIGHT_BLACK, BG_BRIGHT_BLACK;
    bright_red => "bright-red", FG_BRIGHT_RED, BG_BRIGHT_RED;
    bright_green => "bright-green", FG_BRIGHT_GREEN, BG_BRIGHT_GREEN;
    bright_yellow => "bright-yellow", FG_BRIGHT_YELLOW, BG_BRIGHT_YELLOW;
    bright_blue => "bright-blue", FG_BRIGHT_BLUE, BG_BRIGHT_BLUE;
    bright_magenta => "bright-magenta", FG_BRIGHT_MAGENTA, BG_BRIGHT_MAGENTA;
    bright_cyan => "bright-cyan", FG_BRIGHT_CYAN, BG_BRIGHT_CYAN;
    bright_white => "bright-white", FG_BRIGHT_WHITE, BG_BRIGHT_WHITE;
}

impl Color {
    /// A 256-color palette entry.
    pub const fn indexed(index: u8) -> Self {
        Color::Indexed(index)
    }

    /// A 24-bit true color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Parse a hex color, falling back to [`Color::None`] on bad input.
    ///
    /// Accepts `RGB` or `RRGGBB`, optionally prefixed with `#`. In the short
    /// form each digit is doubled, so `F0A` is `FF00AA`.
    ///
    /// # Example
    ///
    /// ```
    /// use vtpaint_ansi::Color;
    /// assert_eq!(Color::hex("#00FF00"), Color::rgb(0, 255, 0));
    /// assert_eq!(Color::hex("12"), Color::None);
    /// ```
    pub fn hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Color::None)
    }

    /// Parse a hex color, reporting why the input was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] unless there are exactly 3 or 6
    /// digits after the optional `#`, and [`ColorError::InvalidDigit`] when
    /// any of them is not a hex digit.
    pub fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let len = digits.len();
        if len != 3 && len != 6 {
            return Err(ColorError::InvalidLength { len });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                input: hex.to_string(),
            });
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidDigit {
                input: hex.to_string(),
            })
        };

        if len == 3 {
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            Ok(Color::rgb(r * 0x11, g * 0x11, b * 0x11))
        } else {
            let r = channel(&digits[0..2])?;
            let g = channel(&digits[2..4])?;
            let b = channel(&digits[4..6])?;
            Ok(Color::rgb(r, g, b))
        }
    }

    /// The 16 named palette colors.
    pub fn basic_palette() -> &'static [(&'static str, Color)] {
        &BASIC_PALETTE
    }

    /// Escape sequence selecting this color as the foreground.
    pub fn foreground_sequence(&self) -> String {
        match self {
            Color::None => String::new(),
            Color::Basic(basic) => basic.fg.to_string(),
            Color::Indexed(index) => codes::fg_indexed(*index),
            Color::Rgb { r, g, b } => codes::fg_rgb(*r, *g, *b),
        }
    }

    /// Escape sequence selecting this color as the background.
    pub fn background_sequence(&self) -> String {
        match self {
            Color::None => String::new(),
            Color::Basic(basic) => basic.bg.to_string(),
            Color::Indexed(index) => codes::bg_indexed(*index),
            Color::Rgb { r, g, b } => codes::bg_rgb(*r, *g, *b),
        }
    }

    /// Returns `true` for [`Color::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }

    fn palette_name(&self) -> Option<&'static str> {
        BASIC_PALETTE
            .iter()
            .find(|(_, color)| color == self)
            .map(|(name, _)| *name)
    }
}

/// Strict parsing of a color specification.
///
/// Accepts a palette name (`red`, `bright-blue`, `bright_blue`), `none` or
/// `default`, a decimal 256-color index, or a hex color. All-digit strings
/// are indices; use a `#` prefix for hex values made only of digits.
///
/// # Example
///
/// ```
/// use vtpaint_ansi::Color;
///
/// assert_eq!("Bright_Blue".parse::<Color>(), Ok(Color::bright_blue()));
/// assert_eq!("208".parse::<Color>(), Ok(Color::indexed(208)));
/// assert_eq!("#ff8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
/// assert!("mauve".parse::<Color>().is_err());
/// ```
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        let normalized = spec.to_ascii_lowercase().replace('_', "-");

        if normalized == "none" || normalized == "default" {
            return Ok(Color::None);
        }

        if let Some((_, color)) = BASIC_PALETTE.iter().find(|(name, _)| *name == normalized) {
            return Ok(*color);
        }

        if !spec.is_empty() && spec.bytes().all(|b| b.is_ascii_digit()) {
            return spec
                .parse::<u8>()
                .map(Color::Indexed)
                .map_err(|_| ColorError::IndexOutOfRange {
                    input: spec.to_string(),
                });
        }

        if spec.starts_with('#') {
            return Self::parse_hex(spec);
        }

        let looks_hex = matches!(spec.len(), 3 | 6) && spec.bytes().all(|b| b.is_ascii_hexdigit());
        if looks_hex {
            return Self::parse_hex(spec);
        }

        Err(ColorError::UnknownName {
            name: spec.to_string(),
        })
    }
}

/// Writes the color in a form [`FromStr`] accepts back.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Basic(_) => f.write_str(self.palette_name().unwrap_or("none")),
            Color::Indexed(index) => write!(f, "{}", index),
            Color::Rgb { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}
