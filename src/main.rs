//! lifeterm - Conway's Game of Life in the terminal
//!
//! The board is seeded randomly to fill the terminal and drawn with
//! half-block glyphs, so every character cell shows two cells of the board.
//! Resizing the terminal starts a fresh board at the new size.
//!
//! # Quick Start
//!
//! ```text
//! lifeterm                 # Random board, 32ms per generation
//! lifeterm -s 1234         # Reproducible board
//! lifeterm -p -f 1         # Denser board, start paused
//! ```
//!
//! # Keybindings
//!
//! | Key | Action |
//! |-----|--------|
//! | + | Faster (halve tick interval) |
//! | - | Slower (double tick interval) |
//! | p / Space | Play/pause |
//! | s | Single step |
//! | q / Ctrl+C | Quit |

mod app;
mod config;
mod core;
mod ui;

use std::env;

use crossterm::event::{self, Event};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::{App, Flow};
use crate::config::Config;
use crate::ui::{KeyMapper, TerminalSurface};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
const LOG_ENV: &str = "LIFETERM_LOG";

/// Command line overrides
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    tick_ms: Option<u64>,
    frequency: Option<u32>,
    seed: Option<u64>,
    paused: bool,
}

impl Args {
    /// Apply over values loaded from the config file
    fn apply(&self, config: &mut Config) {
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.paused {
            config.paused = true;
        }
    }
}

fn print_version() {
    eprintln!("lifeterm {}", VERSION);
}

fn print_help() {
    eprintln!("lifeterm {} - Conway's Game of Life in the terminal", VERSION);
    eprintln!();
    eprintln!("Usage: lifeterm [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --tick-ms <MS>     Starting tick interval (default 32)");
    eprintln!("  -f, --frequency <N>    1 in N+1 cells start alive (default 3)");
    eprintln!("  -s, --seed <SEED>      Fixed random seed");
    eprintln!("  -p, --paused           Start paused");
    eprintln!("  -v, --version          Show version");
    eprintln!("  -h, --help             Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  +                      Faster");
    eprintln!("  -                      Slower");
    eprintln!("  p, Space               Play/pause");
    eprintln!("  s                      Step one generation");
    eprintln!("  q, Ctrl+C              Quit");
    eprintln!();
    eprintln!("Configuration: ~/.lifeterm/config.toml");
    eprintln!("Log: ~/.lifeterm/lifeterm.log (level via {})", LOG_ENV);
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = args
        .get(i)
        .ok_or_else(|| format!("Missing value for {}", flag))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            flag @ ("-t" | "--tick-ms") => {
                i += 1;
                parsed.tick_ms = Some(parse_value(args, i, flag)?);
            }
            flag @ ("-f" | "--frequency") => {
                i += 1;
                parsed.frequency = Some(parse_value(args, i, flag)?);
            }
            flag @ ("-s" | "--seed") => {
                i += 1;
                parsed.seed = Some(parse_value(args, i, flag)?);
            }
            "-p" | "--paused" => {
                parsed.paused = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

/// Log to a file; the terminal itself is busy showing the board
fn init_logging() {
    let Some(dir) = Config::data_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("lifeterm.log"))
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(&argv) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("lifeterm {} starting...", VERSION);

    let mut config = Config::load();
    args.apply(&mut config);
    config.validate()?;

    let (cols, rows) = TerminalSurface::size()?;
    info!("Terminal size: {}x{}", cols, rows);
    let mut app = App::new(&config, cols, rows)?;

    let mut surface = TerminalSurface::new();
    surface.init()?;

    let result = run_main_loop(&mut app, &mut surface);

    if let Err(e) = surface.cleanup() {
        error!("Failed to restore terminal: {}", e);
    }
    if let Err(ref e) = result {
        error!("Exited with error: {}", e);
    }
    result
}

fn run_main_loop(app: &mut App, surface: &mut TerminalSurface) -> anyhow::Result<()> {
    app.game().render(surface)?;

    loop {
        let mut command = None;

        if event::poll(app.tick_interval())? {
            match event::read()? {
                Event::Key(key_event) => {
                    command = KeyMapper::map(&key_event);
                }
                Event::Resize(cols, rows) => {
                    // A new board replaces the old one; skip this round's tick
                    match app.resize(cols, rows) {
                        Ok(()) => {
                            surface.clear()?;
                            app.game().render(surface)?;
                        }
                        Err(e) => warn!("Keeping current board: {}", e),
                    }
                    continue;
                }
                _ => {}
            }
        }

        match app.handle(command) {
            Flow::Quit => break,
            Flow::Advance => {
                app.tick();
                app.game().render(surface)?;
            }
            Flow::Idle => {}
        }
    }

    Ok(())
}
