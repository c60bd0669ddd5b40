//! Command-line interface for vtpaint.
//!
//! Provides argument parsing for the demo, paint and strip commands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vtpaint_ansi::{Color, Style};
use vtpaint_core::Result;

/// vtpaint - ANSI text styling for terminals.
///
/// Paints text with colors and attributes, strips escape sequences back out,
/// and shows off what your terminal can render.
#[derive(Parser, Debug)]
#[command(
    name = "vtpaint",
    author = "vtpaint Contributors",
    version,
    about = "ANSI text styling for terminals",
    after_help = "Examples:\n  \
                  vtpaint demo\n  \
                  vtpaint paint --fg '#AA00FF' --bold 'Hello'\n  \
                  vtpaint paint --style heading 'Section'\n  \
                  ls --color=always | vtpaint strip --count"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a tour of colors, attributes and cursor tricks (default)
    Demo(DemoArgs),

    /// Render text with a style and print it
    Paint(PaintArgs),

    /// Remove escape sequences from input, or count visible characters
    Strip(StripArgs),
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Skip the animated progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Terminal width used to size the progress bar (0 = auto-detect)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Delay between progress bar frames, in milliseconds
    #[arg(long = "delay", default_value = "50")]
    pub delay_ms: u64,
}

/// Matches the clap defaults, used when no subcommand is given.
impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            no_progress: false,
            width: 0,
            delay_ms: 50,
        }
    }
}

impl DemoArgs {
    /// Get the effective width (0 means auto-detect).
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            crossterm::terminal::size()
                .map(|(cols, _)| cols as usize)
                .unwrap_or(80)
        } else {
            self.width as usize
        }
    }
}

#[derive(Args, Debug)]
pub struct PaintArgs {
    /// Text to paint
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Start from a named style in the config
    #[arg(short = 's', long = "style")]
    pub style: Option<String>,

    /// Foreground color: name, 0-255 index, or hex
    #[arg(long = "fg")]
    pub fg: Option<String>,

    /// Background color: name, 0-255 index, or hex
    #[arg(long = "bg")]
    pub bg: Option<String>,

    /// Bold text
    #[arg(long)]
    pub bold: bool,

    /// Faint (dim) text
    #[arg(long)]
    pub faint: bool,

    /// Italic text
    #[arg(long)]
    pub italic: bool,

    /// Underlined text
    #[arg(long)]
    pub underline: bool,

    /// Blinking text
    #[arg(long)]
    pub blink: bool,

    /// Swap foreground and background
    #[arg(long)]
    pub reverse: bool,

    /// Hidden text
    #[arg(long)]
    pub hidden: bool,

    /// Strikethrough text
    #[arg(long)]
    pub strikethrough: bool,

    /// Do not print a trailing newline
    #[arg(short = 'n', long = "no-newline")]
    pub no_newline: bool,
}

impl PaintArgs {
    /// Layer the command-line colors and flags over `base`.
    ///
    /// Flags only switch attributes on; attributes already set by `base`
    /// stay set.
    pub fn apply(&self, base: Style) -> Result<Style> {
        let mut style = base
            .bold(base.is_bold() || self.bold)
            .faint(base.is_faint() || self.faint)
            .italic(base.is_italic() || self.italic)
            .underline(base.is_underline() || self.underline)
            .blink(base.is_blink() || self.blink)
            .reverse(base.is_reverse() || self.reverse)
            .hidden(base.is_hidden() || self.hidden)
            .strikethrough(base.is_strikethrough() || self.strikethrough);

        if let Some(ref fg) = self.fg {
            style = style.foreground(fg.parse::<Color>()?);
        }
        if let Some(ref bg) = self.bg {
            style = style.background(bg.parse::<Color>()?);
        }

        Ok(style)
    }
}

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the visible length of each line instead of its text
    #[arg(long = "count")]
    pub count: bool,
}

/// Show paths information.
pub fn show_paths() {
    use vtpaint_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
