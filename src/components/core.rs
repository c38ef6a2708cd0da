//! Core component definitions and traits.

use std::any::Any;
use std::fmt;

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::components::events::ComponentEvent;

/// Unique identifier for components
///
/// Ids are handed out by a process-wide counter, so a component keeps the
/// same identity for its whole lifetime. UI elements produced from lists
/// (board cells, history rows) rely on this as their stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub u64);

impl ComponentId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        ComponentId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors surfaced by component rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentError {
    /// The frame is too small to lay the component out
    TerminalTooSmall {
        width: u16,
        height: u16,
    },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::TerminalTooSmall { width, height } => {
                write!(f, "terminal area {}x{} is too small to render into", width, height)
            }
        }
    }
}

impl std::error::Error for ComponentError {}

pub type ComponentResult<T> = Result<T, ComponentError>;

/// `Ok(true)` when the event was consumed and should not propagate further
pub type EventResult = ComponentResult<bool>;

/// Core trait that all components must implement
pub trait Component: Any + Send + Sync {
    /// Get the unique ID of this component
    fn id(&self) -> ComponentId;

    /// Get the type name of this component
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Render the component into `area`, reading display state from `app`
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()>;

    /// Handle an event, possibly mutating `app`
    fn handle_event(&mut self, _event: &ComponentEvent, _app: &mut App) -> EventResult {
        Ok(false) // Default: don't consume events
    }

    /// Update component state (called once per loop iteration, before render)
    fn update(&mut self, _app: &mut App) -> ComponentResult<()> {
        Ok(())
    }

    /// Get child components
    fn children(&self) -> Vec<&dyn Component> {
        Vec::new() // Default: no children
    }

    /// Get mutable child components
    fn children_mut(&mut self) -> Vec<&mut dyn Component> {
        Vec::new()
    }

    /// Get component as Any for downcasting
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Macro to help implement Component trait
#[macro_export]
macro_rules! impl_component_base {
    ($type:ty) => {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }

        fn type_name(&self) -> &'static str {
            std::any::type_name::<$type>()
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ComponentId::new();
        let b = ComponentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn error_display() {
        let err = ComponentError::TerminalTooSmall { width: 10, height: 4 };
        assert_eq!(err.to_string(), "terminal area 10x4 is too small to render into");
    }
}
