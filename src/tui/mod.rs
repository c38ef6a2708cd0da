//! # Terminal User Interface Module
//!
//! This module provides the terminal-based user interface for the game,
//! built using the Ratatui library. It handles terminal lifecycle, the main
//! event loop, and the translation of raw input into component events.
//!
//! ## Key Components
//! - **Terminal Management**: Initialization and cleanup of raw terminal mode
//! - **Event Loop**: Poll for input, update components, render the tree
//! - **Input Processing**: Global shortcuts first, then the component tree
//! - **Mouse Support**: Clicks on board cells and history rows

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

use crate::app::App;
use crate::components::events::ComponentEvent;
use crate::components::manager::ComponentManager;
use crate::components::ui::GameComponent;

pub mod input;
pub mod layout;

/// Runtime options for the interface
#[derive(Debug, Clone, Copy)]
pub struct TuiOptions {
    /// How long to wait for input before redrawing
    pub tick: Duration,
    /// Whether to capture mouse events
    pub mouse: bool,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            mouse: true,
        }
    }
}

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the main event loop, and restores the
/// terminal on the way out, including when the loop returns an error.
pub fn run(app: &mut App, options: &TuiOptions) -> io::Result<()> {
    let mut terminal = init_terminal(options.mouse)?;
    let result = run_loop(&mut terminal, app, options);
    let restored = restore_terminal(&mut terminal, options.mouse);
    result.and(restored)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    options: &TuiOptions,
) -> io::Result<()> {
    let mut manager = ComponentManager::new();
    manager.set_root_component(Box::new(GameComponent::new()));

    loop {
        if app.should_quit {
            return Ok(());
        }

        manager.update(app);
        terminal.draw(|frame| {
            let area = frame.area();
            manager.render(frame, area, app);
        })?;

        if event::poll(options.tick)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press
                        && !input::handle_key_press(app, key.code)
                    {
                        manager.handle_event(&ComponentEvent::key(key.code), app);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(event) = ComponentEvent::from_mouse(mouse) {
                        manager.handle_event(&event, app);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Initializes the terminal for raw mode operation
fn init_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Restores the terminal to normal operation mode
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;
    Ok(())
}
