//! vtpaint ANSI
//!
//! This crate builds ANSI/VT100 escape sequences for colors, text
//! attributes, cursor movement and screen clearing, and strips them back
//! out of text for measurement.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants
//! - [`color`] - The four-way [`Color`] model (none, basic, 256, true color)
//! - [`style`] - The [`Style`] builder and on/off style pairs
//! - [`utils`] - Stripping and visible length
//! - [`cursor`] - Cursor movement sequences
//! - [`screen`] - Screen/line clearing and buffer switching
//!
//! # Example
//!
//! ```
//! use vtpaint_ansi::{utils, Color, Style};
//!
//! let title = Style::new().foreground(Color::hex("#AA00FF")).bold(true);
//! let text = title.render("Purple");
//! assert_eq!(text, "\x1b[38;2;170;0;255m\x1b[1mPurple\x1b[0m");
//!
//! // Get visible length (ignoring ANSI codes)
//! assert_eq!(utils::visible_length(&text), 6);
//! ```

pub mod codes;
pub mod color;
pub mod cursor;
pub mod screen;
pub mod style;
pub mod utils;

pub use codes::*;
pub use color::*;
pub use cursor::*;
pub use screen::*;
pub use style::*;
pub use utils::*;
