//! # Input Handling Module
//!
//! Global keyboard shortcuts. Keys handled here apply regardless of which
//! panel has focus; anything left unhandled is forwarded to the component
//! tree, where the focused panel interprets it.

use crossterm::event::KeyCode;

use crate::app::App;

/// Handle an application-level key press.
///
/// Returns true when the key was consumed here, so the caller knows not to
/// forward it to the components.
pub fn handle_key_press(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('r') => {
            app.reset();
            true
        }
        KeyCode::Tab => {
            app.toggle_focus();
            true
        }
        KeyCode::Char('[') => {
            app.jump_back();
            true
        }
        KeyCode::Char(']') => {
            app.jump_forward();
            true
        }
        _ => false,
    }
}
