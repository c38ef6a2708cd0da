//! Component manager for handling component lifecycle and events.

use std::collections::HashMap;

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::components::core::{Component, ComponentId};
use crate::components::events::ComponentEvent;

/// Manages the lifecycle and event routing for components
///
/// The manager owns every registered component. Rendering starts from the
/// designated root; events are offered to the root first and broadcast to
/// the remaining components only when the root leaves them unconsumed.
pub struct ComponentManager {
    components: HashMap<ComponentId, Box<dyn Component>>,
    root_component: Option<ComponentId>,
}

impl ComponentManager {
    /// Create a new component manager
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            root_component: None,
        }
    }

    /// Register a component with the manager
    pub fn register_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = component.id();
        self.components.insert(id, component);
        id
    }

    /// Register a component and make it the root
    pub fn set_root_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = self.register_component(component);
        self.root_component = Some(id);
        id
    }

    /// Get a component by ID
    pub fn get_component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components.get(&id).map(|c| c.as_ref())
    }

    /// Get a mutable component by ID
    pub fn get_component_mut(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        self.components.get_mut(&id).map(|c| c.as_mut())
    }

    /// Get the root component ID
    pub fn root_component_id(&self) -> Option<ComponentId> {
        self.root_component
    }

    /// Route an event: root first, then broadcast to the rest.
    /// Returns true when some component consumed the event.
    pub fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> bool {
        if let Some(root_id) = self.root_component {
            if let Some(root) = self.components.get_mut(&root_id) {
                if root.handle_event(event, app).unwrap_or(false) {
                    return true;
                }
            }
        }

        for (id, component) in self.components.iter_mut() {
            if Some(*id) == self.root_component {
                continue;
            }
            if component.handle_event(event, app).unwrap_or(false) {
                return true;
            }
        }

        false
    }

    /// Update all components
    pub fn update(&mut self, app: &mut App) {
        for component in self.components.values_mut() {
            if let Err(err) = component.update(app) {
                tracing::warn!(%err, component = component.type_name(), "component update failed");
            }
        }
    }

    /// Render the tree starting from the root
    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        if let Some(root_id) = self.root_component {
            if let Some(root) = self.components.get_mut(&root_id) {
                if let Err(err) = root.render(frame, area, app) {
                    tracing::warn!(%err, "render skipped");
                }
            }
        }
    }
}

impl Default for ComponentManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::core::{ComponentResult, EventResult};
    use crossterm::event::KeyCode;

    struct Probe {
        id: ComponentId,
        consume: bool,
        seen: usize,
    }

    impl Probe {
        fn new(consume: bool) -> Self {
            Self {
                id: ComponentId::new(),
                consume,
                seen: 0,
            }
        }
    }

    impl Component for Probe {
        fn id(&self) -> ComponentId {
            self.id
        }

        fn render(&mut self, _frame: &mut Frame, _area: Rect, _app: &App) -> ComponentResult<()> {
            Ok(())
        }

        fn handle_event(&mut self, _event: &ComponentEvent, _app: &mut App) -> EventResult {
            self.seen += 1;
            Ok(self.consume)
        }

        crate::impl_component_base!(Probe);
    }

    #[test]
    fn root_consumes_before_broadcast() {
        let mut manager = ComponentManager::new();
        let root_id = manager.set_root_component(Box::new(Probe::new(true)));
        let other_id = manager.register_component(Box::new(Probe::new(true)));

        let mut app = App::new();
        assert!(manager.handle_event(&ComponentEvent::key(KeyCode::Up), &mut app));

        let root = manager.get_component(root_id).unwrap();
        let root = root.as_any().downcast_ref::<Probe>().unwrap();
        assert_eq!(root.seen, 1);

        let other = manager.get_component(other_id).unwrap();
        let other = other.as_any().downcast_ref::<Probe>().unwrap();
        assert_eq!(other.seen, 0);
    }

    #[test]
    fn unconsumed_event_reaches_other_components_once() {
        let mut manager = ComponentManager::new();
        let root_id = manager.set_root_component(Box::new(Probe::new(false)));
        manager.register_component(Box::new(Probe::new(false)));

        let mut app = App::new();
        assert!(!manager.handle_event(&ComponentEvent::key(KeyCode::Up), &mut app));

        let root = manager.get_component(root_id).unwrap();
        let root = root.as_any().downcast_ref::<Probe>().unwrap();
        assert_eq!(root.seen, 1);
    }

    #[test]
    fn empty_manager_ignores_events() {
        let mut manager = ComponentManager::new();
        let mut app = App::new();
        assert!(!manager.handle_event(&ComponentEvent::key(KeyCode::Up), &mut app));
        assert_eq!(manager.root_component_id(), None);
    }
}
