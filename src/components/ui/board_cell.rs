//! Board cell component: one clickable square of the grid.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::core::{Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::{ComponentEvent, InputEvent};
use crate::games::tictactoe::{Board, Mark};

/// A single cell of the board grid.
///
/// The cell remembers the area it was last rendered into and claims any
/// left-click landing inside it, translating the click into a move on its
/// fixed cell index.
pub struct BoardCellComponent {
    id: ComponentId,
    cell: usize,
    area: Option<Rect>,
    value: Option<Mark>,
    is_cursor: bool,
    is_winning: bool,
}

impl BoardCellComponent {
    pub fn new(cell: usize) -> Self {
        Self {
            id: ComponentId::new(),
            cell,
            area: None,
            value: None,
            is_cursor: false,
            is_winning: false,
        }
    }

    pub fn cell(&self) -> usize {
        self.cell
    }

    pub fn set_value(&mut self, value: Option<Mark>) {
        self.value = value;
    }

    pub fn set_cursor(&mut self, is_cursor: bool) {
        self.is_cursor = is_cursor;
    }

    pub fn set_winning(&mut self, is_winning: bool) {
        self.is_winning = is_winning;
    }

    /// Symbol and style for the cell content
    fn appearance(&self) -> (&'static str, Style) {
        match self.value {
            Some(Mark::X) => {
                let color = if self.is_winning { Color::Green } else { Color::Red };
                ("X", Style::default().fg(color).add_modifier(Modifier::BOLD))
            }
            Some(Mark::O) => {
                let color = if self.is_winning { Color::Green } else { Color::Blue };
                ("O", Style::default().fg(color).add_modifier(Modifier::BOLD))
            }
            None => {
                if self.is_cursor {
                    ("·", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    ("·", Style::default().fg(Color::DarkGray))
                }
            }
        }
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|area| {
            x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
        })
    }
}

impl Component for BoardCellComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _app: &App) -> ComponentResult<()> {
        self.area = Some(area);

        let border_style = if self.is_cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return Ok(());
        }

        // Center the mark vertically by rendering into the middle row.
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        let (symbol, style) = self.appearance();
        let paragraph = Paragraph::new(symbol).style(style).alignment(Alignment::Center);
        frame.render_widget(paragraph, middle);

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        match event {
            ComponentEvent::Input(InputEvent::MouseClick { x, y }) if self.contains(*x, *y) => {
                let (row, col) = Board::coords(self.cell);
                app.board_cursor = (row as u16, col as u16);
                app.select_cell(self.cell);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    crate::impl_component_base!(BoardCellComponent);
}
