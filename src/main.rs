//! vtpaint - ANSI text styling for terminals.
//!
//! This binary exposes the vtpaint library on the command line: a demo
//! tour, a `paint` command for styling text, and a `strip` command for
//! removing escape sequences from piped output.

mod cli;
mod demo;

use clap::Parser as ClapParser;
use cli::{Cli, Command, DemoArgs, PaintArgs, StripArgs};
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use vtpaint_ansi::{utils, Style};
use vtpaint_config::Config;
use vtpaint_core::Result;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("vtpaint v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let path = Config::ensure_config_file()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Only the commands that use named styles read the config
    match cli.command {
        Some(Command::Demo(ref args)) => run_demo(&load_config(cli)?, args),
        Some(Command::Paint(ref args)) => run_paint(&load_config(cli)?, args),
        Some(Command::Strip(ref args)) => run_strip(args),
        None => run_demo(&load_config(cli)?, &DemoArgs::default()),
    }
}

/// Load the config file, merged with any `--config` override.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded {} named styles", config.styles.len());
    Ok(config)
}

/// Print the demo tour to stdout.
fn run_demo(config: &Config, args: &DemoArgs) -> Result<()> {
    info!("Running demo");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, config, args)?;
    Ok(())
}

/// Paint the given text and print it.
fn run_paint(config: &Config, args: &PaintArgs) -> Result<()> {
    let base = match args.style {
        Some(ref name) => config.style(name)?,
        None => Style::new(),
    };
    let style = args.apply(base)?;
    debug!("Painting with style: {:?}", style);

    let mut out = io::stdout().lock();
    write!(out, "{}", style.render(&args.text))?;
    if !args.no_newline {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Strip escape sequences from a file or stdin.
fn run_strip(args: &StripArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.file {
        Some(ref path) => {
            info!("Processing file: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            strip_lines(reader, &mut out, args.count)?;
        }
        None => {
            info!("Reading from stdin");
            strip_lines(io::stdin().lock(), &mut out, args.count)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Write each input line stripped of escape sequences, or its visible length.
fn strip_lines<R: BufRead, W: Write>(reader: R, out: &mut W, count: bool) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        trace!("Input line: {:?}", line);

        if count {
            writeln!(out, "{}", utils::visible_length(&line))?;
        } else {
            writeln!(out, "{}", utils::strip(&line))?;
        }
    }
    Ok(())
}
