//! Error types for vtpaint

use thiserror::Error;

/// Reasons a color specification could not be parsed.
///
/// Only the strict parsers (`Color::parse_hex`, `Color::from_str`) report
/// these. The lenient `Color::hex` constructor swallows them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex string (after an optional `#`) was not 3 or 6 digits long
    #[error("hex color must have 3 or 6 digits, got {len}")]
    InvalidLength { len: usize },

    /// Hex string contained something other than hex digits
    #[error("invalid hex digit in {input:?}")]
    InvalidDigit { input: String },

    /// Not a palette name, index or hex value
    #[error("unknown color name {name:?}")]
    UnknownName { name: String },

    /// Numeric index above 255
    #[error("palette index {input} is out of range (0-255)")]
    IndexOutOfRange { input: String },
}

/// Main error type for vtpaint operations
#[derive(Error, Debug)]
pub enum VtpaintError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Color specification error
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// A named style was requested but is not defined
    #[error("Unknown style: {0}")]
    UnknownStyle(String),
}

/// Result type alias for vtpaint operations
pub type Result<T> = std::result::Result<T, VtpaintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_messages() {
        assert_eq!(
            ColorError::InvalidLength { len: 2 }.to_string(),
            "hex color must have 3 or 6 digits, got 2"
        );
        assert_eq!(
            ColorError::IndexOutOfRange {
                input: "300".to_string()
            }
            .to_string(),
            "palette index 300 is out of range (0-255)"
        );
    }

    #[test]
    fn test_color_error_converts() {
        let err: VtpaintError = ColorError::UnknownName {
            name: "mauve".to_string(),
        }
        .into();
        assert!(matches!(err, VtpaintError::Color(_)));
        assert_eq!(err.to_string(), "Color error: unknown color name \"mauve\"");
    }
}
