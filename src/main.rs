//! # Terminal Tic-Tac-Toe
//!
//! Entry point for the interactive tic-tac-toe game. The application
//! provides a terminal user interface (TUI) built with Ratatui: click a
//! board cell (or steer the cursor with the arrow keys) to place a mark,
//! and use the move-history panel to jump back to any earlier position.
//!
//! ## Usage
//! Run with `cargo run` and play in the terminal. Set `RUST_LOG=debug` to
//! see move-by-move logging, ideally combined with `--log-file` so the log
//! output does not fight the alternate screen.

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use tictactoe::app::App;
use tictactoe::tui::{self, TuiOptions};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds to wait for input before redrawing
    #[clap(long, default_value_t = 100)]
    tick_ms: u64,

    /// Run without mouse capture (keyboard only)
    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_mouse: bool,

    /// Write logs to this file instead of stderr
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    tracing::info!("starting tic-tac-toe");

    let mut app = App::new();
    let options = TuiOptions {
        tick: Duration::from_millis(args.tick_ms),
        mouse: !args.no_mouse,
    };
    tui::run(&mut app, &options)
}

fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            builder
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => builder.init(),
    }
    Ok(())
}
