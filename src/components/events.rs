//! Event system for component communication.
//!
//! Raw crossterm events are translated into `ComponentEvent`s at the TUI
//! boundary and routed through the component tree by the manager. A handler
//! returns `Ok(true)` to consume an event and stop propagation.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

/// Input events that can be sent to components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPress(KeyCode),
    MouseClick { x: u16, y: u16 },
    MouseScroll { x: u16, y: u16, up: bool },
}

/// Main event type for the component system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Input events (keyboard, mouse)
    Input(InputEvent),
}

impl ComponentEvent {
    /// Translate a crossterm mouse event into a component event, if the
    /// component system handles that kind of event.
    pub fn from_mouse(event: MouseEvent) -> Option<Self> {
        let input = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::MouseClick {
                x: event.column,
                y: event.row,
            },
            MouseEventKind::ScrollUp => InputEvent::MouseScroll {
                x: event.column,
                y: event.row,
                up: true,
            },
            MouseEventKind::ScrollDown => InputEvent::MouseScroll {
                x: event.column,
                y: event.row,
                up: false,
            },
            _ => return None,
        };
        Some(ComponentEvent::Input(input))
    }

    /// Shorthand for a key-press event.
    pub fn key(code: KeyCode) -> Self {
        ComponentEvent::Input(InputEvent::KeyPress(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_click_translates() {
        let event = ComponentEvent::from_mouse(mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(
            event,
            Some(ComponentEvent::Input(InputEvent::MouseClick { x: 3, y: 7 }))
        );
    }

    #[test]
    fn scroll_translates() {
        let event = ComponentEvent::from_mouse(mouse(MouseEventKind::ScrollUp));
        assert_eq!(
            event,
            Some(ComponentEvent::Input(InputEvent::MouseScroll { x: 3, y: 7, up: true }))
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let event = ComponentEvent::from_mouse(mouse(MouseEventKind::Down(MouseButton::Right)));
        assert_eq!(event, None);
        let event = ComponentEvent::from_mouse(mouse(MouseEventKind::Moved));
        assert_eq!(event, None);
    }
}
