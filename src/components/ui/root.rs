//! Root component: overall layout and event fan-out.

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::components::core::{Component, ComponentError, ComponentId, ComponentResult, EventResult};
use crate::components::events::ComponentEvent;
use crate::components::ui::{BoardComponent, MoveHistoryComponent, StatusComponent};
use crate::tui::layout::LayoutConfig;

/// Smallest frame the game view lays out into
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 14;

/// The top-level game view: board on the left, status and move history in a
/// sidebar on the right. Events are offered to the children in order; the
/// first consumer wins.
pub struct GameComponent {
    id: ComponentId,
    layout: LayoutConfig,
    board: BoardComponent,
    status: StatusComponent,
    history: MoveHistoryComponent,
}

impl GameComponent {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            layout: LayoutConfig::default(),
            board: BoardComponent::new(),
            status: StatusComponent::new(),
            history: MoveHistoryComponent::new(),
        }
    }
}

impl Component for GameComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Err(ComponentError::TerminalTooSmall {
                width: area.width,
                height: area.height,
            });
        }

        let (board_area, sidebar) = self.layout.game_layout(area);
        let (status_area, history_area) = self.layout.sidebar_layout(sidebar);

        self.board.render(frame, board_area, app)?;
        self.status.render(frame, status_area, app)?;
        self.history.render(frame, history_area, app)?;

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        for child in self.children_mut() {
            if child.handle_event(event, app)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn update(&mut self, app: &mut App) -> ComponentResult<()> {
        for child in self.children_mut() {
            child.update(app)?;
        }
        Ok(())
    }

    fn children(&self) -> Vec<&dyn Component> {
        vec![&self.board, &self.history, &self.status]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Component> {
        vec![&mut self.board, &mut self.history, &mut self.status]
    }

    crate::impl_component_base!(GameComponent);
}

impl Default for GameComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn renders_into_a_normal_frame() {
        let mut root = GameComponent::new();
        let app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        let mut result = Ok(());
        terminal
            .draw(|frame| {
                let area = frame.area();
                result = root.render(frame, area, &app);
            })
            .unwrap();
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn refuses_a_tiny_frame() {
        let mut root = GameComponent::new();
        let app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();

        let mut result = Ok(());
        terminal
            .draw(|frame| {
                let area = frame.area();
                result = root.render(frame, area, &app);
            })
            .unwrap();
        assert_eq!(
            result,
            Err(ComponentError::TerminalTooSmall { width: 20, height: 5 })
        );
    }
}
