//! The `demo` command: a tour of what the library can render.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::debug;
use vtpaint_ansi::{clear_line, hide_cursor, show_cursor, utils, Color, Style};
use vtpaint_config::Config;

use crate::cli::DemoArgs;

/// Number of frames in the progress animation.
const PROGRESS_STEPS: usize = 10;

/// Print every demo section, then the progress bar unless disabled.
pub fn run<W: Write>(out: &mut W, config: &Config, args: &DemoArgs) -> io::Result<()> {
    let heading = config
        .style("heading")
        .unwrap_or_else(|_| Style::new().bold(true).underline(true));
    debug!("Demo heading style: {:?}", heading);

    write_sections(out, &heading)?;

    if !args.no_progress {
        let bar_width = progress_width(args.effective_width());
        let delay = Duration::from_millis(args.delay_ms);
        write_progress(out, &heading, bar_width, delay)?;
    }

    out.flush()
}

/// Write the static part of the demo.
pub fn write_sections<W: Write>(out: &mut W, heading: &Style) -> io::Result<()> {
    writeln!(out, "{}", heading.render("--- Basic Colors ---"))?;
    for (name, color) in Color::basic_palette() {
        let swatch = Style::new().foreground(*color).render(name);
        write!(out, "{} ", swatch)?;
    }
    writeln!(out)?;
    writeln!(out)?;

    writeln!(out, "{}", heading.render("--- Advanced Colors ---"))?;
    let advanced = [
        (Color::rgb(255, 165, 0), "Orange (RGB 255,165,0)"),
        (Color::hex("#AA00FF"), "Purple (Hex #AA00FF)"),
        (Color::indexed(208), "Color 208 (256 Palette)"),
    ];
    for (color, label) in advanced {
        writeln!(out, "{}", Style::new().foreground(color).render(label))?;
    }
    writeln!(out)?;

    writeln!(out, "{}", heading.render("--- Text Styles ---"))?;
    let plain = Style::new();
    let attributes = [
        (plain.bold(true), "Bold Text"),
        (plain.faint(true), "Faint Text"),
        (plain.italic(true), "Italic Text"),
        (plain.underline(true), "Underlined Text"),
        (plain.blink(true), "Blinking Text"),
        (plain.reverse(true), "Reversed Text"),
        (plain.strikethrough(true), "Strikethrough Text"),
        (plain.hidden(true), "Hidden Text (You shouldn't see this)"),
    ];
    for (style, label) in attributes {
        writeln!(out, "{}", style.render(label))?;
    }
    writeln!(out, " (End of hidden text)")?;
    writeln!(out)?;

    writeln!(out, "{}", heading.render("--- Backgrounds ---"))?;
    let white_on_red = Style::new()
        .background(Color::red())
        .foreground(Color::white());
    let yellow_on_blue = Style::new()
        .background(Color::blue())
        .foreground(Color::yellow())
        .bold(true);
    writeln!(out, "{}", white_on_red.render(" White on Red "))?;
    writeln!(out, "{}", yellow_on_blue.render(" Bold Yellow on Blue "))?;
    writeln!(out)?;

    writeln!(out, "{}", heading.render("--- Cursor & Screen Utilities ---"))?;
    let sample = "\x1b[31mHello\x1b[0m";
    writeln!(
        out,
        "Strip Test: '{}' (len: {})",
        utils::strip(sample),
        utils::visible_length(sample)
    )?;

    Ok(())
}

/// Animate a progress bar on the current line.
fn write_progress<W: Write>(
    out: &mut W,
    heading: &Style,
    bar_width: usize,
    delay: Duration,
) -> io::Result<()> {
    writeln!(out, "Simulating progress bar (Cursor Movement)...")?;
    write!(out, "{}", hide_cursor())?;

    let fill = Style::new().foreground(Color::green());
    let mut result = Ok(());
    for step in 0..=PROGRESS_STEPS {
        let frame = progress_bar(step, PROGRESS_STEPS, bar_width, &fill);
        result = write!(out, "\r{}{}", clear_line(), frame).and_then(|_| out.flush());
        if result.is_err() {
            break;
        }
        thread::sleep(delay);
    }

    // Always bring the cursor back, even if a frame failed to write
    write!(out, "{}", show_cursor())?;
    result?;
    writeln!(out, "\n{}", heading.render("Done!"))
}

/// Bar width that fits `columns`, leaving room for brackets and percentage.
pub fn progress_width(columns: usize) -> usize {
    columns.saturating_sub(8).clamp(10, 40)
}

/// Render one frame of the progress bar, e.g. `[=====-----] 50%`.
pub fn progress_bar(step: usize, steps: usize, width: usize, fill: &Style) -> String {
    let steps = steps.max(1);
    let step = step.min(steps);
    let filled = width * step / steps;
    let bar = format!(
        "{}{}",
        fill.render(&"=".repeat(filled)),
        "-".repeat(width - filled)
    );
    format!("[{}] {}%", bar, step * 100 / steps)
}
