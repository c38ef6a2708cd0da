//! Board component: the 3x3 grid of cells.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, Focus};
use crate::components::core::{Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::{ComponentEvent, InputEvent};
use crate::components::ui::BoardCellComponent;
use crate::games::tictactoe::{winning_line, Board, CELL_COUNT};
use crate::tui::layout;
use crossterm::event::KeyCode;

/// Renders the board as a grid of `BoardCellComponent`s and drives keyboard
/// play when the board panel has focus. Mouse clicks are delegated to the
/// cells, which hit-test themselves.
pub struct BoardComponent {
    id: ComponentId,
    cells: Vec<BoardCellComponent>,
}

impl BoardComponent {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            cells: (0..CELL_COUNT).map(BoardCellComponent::new).collect(),
        }
    }

    /// Copy display state out of the app into the cells for this frame.
    fn sync_cells(&mut self, app: &App) {
        let board = app.controller.board();
        let winning = winning_line(board);
        let cursor = Board::index(app.board_cursor.0 as usize, app.board_cursor.1 as usize);
        let show_cursor = app.focus == Focus::Board;

        for cell in &mut self.cells {
            let index = cell.cell();
            cell.set_value(board.cell(index));
            cell.set_cursor(show_cursor && index == cursor);
            cell.set_winning(winning.is_some_and(|line| line.contains(&index)));
        }
    }

    fn handle_key(&mut self, key: KeyCode, app: &mut App) -> EventResult {
        match key {
            KeyCode::Up => {
                app.move_cursor(-1, 0);
                Ok(true)
            }
            KeyCode::Down => {
                app.move_cursor(1, 0);
                Ok(true)
            }
            KeyCode::Left => {
                app.move_cursor(0, -1);
                Ok(true)
            }
            KeyCode::Right => {
                app.move_cursor(0, 1);
                Ok(true)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.select_cursor_cell();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Component for BoardComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        self.sync_cells(app);

        let border_style = if app.focus == Focus::Board {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Board");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let grid = layout::cell_rects(inner);
        for (cell, rect) in self.cells.iter_mut().zip(grid) {
            cell.render(frame, rect, app)?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        // Cells hit-test clicks themselves.
        for cell in &mut self.cells {
            if cell.handle_event(event, app)? {
                return Ok(true);
            }
        }

        let ComponentEvent::Input(InputEvent::KeyPress(key)) = event else {
            return Ok(false);
        };
        if app.focus != Focus::Board {
            return Ok(false);
        }
        self.handle_key(*key, app)
    }

    fn children(&self) -> Vec<&dyn Component> {
        self.cells.iter().map(|c| c as &dyn Component).collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Component> {
        self.cells.iter_mut().map(|c| c as &mut dyn Component).collect()
    }

    crate::impl_component_base!(BoardComponent);
}

impl Default for BoardComponent {
    fn default() -> Self {
        Self::new()
    }
}
