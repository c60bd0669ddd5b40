//! Style configuration.
//!
//! A [`StyleConfig`] is the TOML form of a [`Style`]: optional color
//! strings plus the eight attribute switches.

use serde::{Deserialize, Serialize};
use vtpaint_ansi::{Color, Style};
use vtpaint_core::Result;

/// One named style as written in the config file.
///
/// Colors use any form `Color::from_str` accepts: palette names
/// (`"bright-blue"`), 256-color indices (`"208"`) or hex (`"#AA00FF"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Foreground color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,

    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,

    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
}

impl StyleConfig {
    /// Resolve into a [`Style`].
    ///
    /// # Errors
    ///
    /// Returns `VtpaintError::Color` if either color string is invalid.
    pub fn to_style(&self) -> Result<Style> {
        let mut style = Style::new()
            .bold(self.bold)
            .faint(self.faint)
            .italic(self.italic)
            .underline(self.underline)
            .blink(self.blink)
            .reverse(self.reverse)
            .hidden(self.hidden)
            .strikethrough(self.strikethrough);

        if let Some(ref fg) = self.fg {
            style = style.foreground(fg.parse::<Color>()?);
        }
        if let Some(ref bg) = self.bg {
            style = style.background(bg.parse::<Color>()?);
        }

        Ok(style)
    }

    /// Build the config form of an existing [`Style`].
    pub fn from_style(style: &Style) -> Self {
        Self {
            fg: style.fg().map(|c| c.to_string()),
            bg: style.bg().map(|c| c.to_string()),
            bold: style.is_bold(),
            faint: style.is_faint(),
            italic: style.is_italic(),
            underline: style.is_underline(),
            blink: style.is_blink(),
            reverse: style.is_reverse(),
            hidden: style.is_hidden(),
            strikethrough: style.is_strikethrough(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtpaint_core::VtpaintError;

    #[test]
    fn test_to_style() {
        let config: StyleConfig = toml::from_str(
            r##"
            fg = "red"
            bg = "#0000ff"
            bold = true
        "##,
        )
        .unwrap();

        let style = config.to_style().unwrap();
        assert_eq!(style.fg(), Some(Color::red()));
        assert_eq!(style.bg(), Some(Color::rgb(0, 0, 255)));
        assert!(style.is_bold());
        assert!(!style.is_italic());
    }

    #[test]
    fn test_empty_is_plain() {
        let config = StyleConfig::default();
        assert!(config.to_style().unwrap().is_plain());
    }

    #[test]
    fn test_invalid_color() {
        let config = StyleConfig {
            fg: Some("chartreuse".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.to_style(), Err(VtpaintError::Color(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed = toml::from_str::<StyleConfig>("boldd = true");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_from_style_round_trip() {
        let style = Style::new()
            .foreground(Color::indexed(208))
            .background(Color::bright_black())
            .italic(true)
            .strikethrough(true);
        let config = StyleConfig::from_style(&style);
        assert_eq!(config.fg.as_deref(), Some("208"));
        assert_eq!(config.bg.as_deref(), Some("bright-black"));
        assert_eq!(config.to_style().unwrap(), style);
    }
}
