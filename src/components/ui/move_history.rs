//! Move history component: the clickable "time travel" list.
//!
//! Each snapshot in the controller's history appears as one list row, keyed
//! by its move index. The row for the current step is highlighted; clicking
//! a row (or selecting it with the keyboard and pressing Enter) jumps the
//! game back or forward to that snapshot.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::{App, Focus};
use crate::components::core::{Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::{ComponentEvent, InputEvent};
use crate::games::tictactoe::{cell_label, Mark};
use crossterm::event::KeyCode;

pub struct MoveHistoryComponent {
    id: ComponentId,
    /// Inner list area from the last render, for click row math
    inner: Option<Rect>,
    list_state: ListState,
    /// Selection while the user browses with the keyboard or scroll wheel;
    /// cleared when focus leaves, so the list follows the current step again
    browse: Option<usize>,
}

impl MoveHistoryComponent {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            inner: None,
            list_state: ListState::default(),
            browse: None,
        }
    }

    /// Row label in the style of the original history list
    fn label(index: usize, placed: Option<(usize, Mark)>) -> String {
        match placed {
            None => String::from("Go to game start"),
            Some((cell, mark)) => format!("Go to move #{} ({} {})", index, mark, cell_label(cell)),
        }
    }

    fn selection(&self, app: &App) -> usize {
        let len = app.controller.history().len();
        self.browse.filter(|&b| b < len).unwrap_or(app.controller.step())
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        self.inner.is_some_and(|area| {
            x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
        })
    }

    fn handle_key(&mut self, key: KeyCode, app: &mut App) -> EventResult {
        let len = app.controller.history().len();
        match key {
            KeyCode::Up => {
                self.browse = Some(self.selection(app).saturating_sub(1));
                Ok(true)
            }
            KeyCode::Down => {
                self.browse = Some((self.selection(app) + 1).min(len - 1));
                Ok(true)
            }
            KeyCode::Enter => {
                let target = self.selection(app);
                self.browse = None;
                app.jump_to(target);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Component for MoveHistoryComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn update(&mut self, app: &mut App) -> ComponentResult<()> {
        // Without focus the list tracks the current step.
        if app.focus != Focus::History {
            self.browse = None;
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        let border_style = if app.focus == Focus::History {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Move History");
        self.inner = Some(block.inner(area));

        let step = app.controller.step();
        let items: Vec<ListItem> = app
            .controller
            .history()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let style = if index == step {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Self::label(index, entry.placed())).style(style)
            })
            .collect();

        self.list_state.select(Some(self.selection(app)));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.list_state);

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        match event {
            ComponentEvent::Input(InputEvent::MouseClick { x, y }) if self.contains(*x, *y) => {
                let inner = self.inner.unwrap_or_default();
                let index = self.list_state.offset() + (*y - inner.y) as usize;
                if index < app.controller.history().len() {
                    self.browse = None;
                    app.jump_to(index);
                }
                Ok(true)
            }
            ComponentEvent::Input(InputEvent::MouseScroll { x, y, up }) if self.contains(*x, *y) => {
                let len = app.controller.history().len();
                let selection = self.selection(app);
                self.browse = Some(if *up {
                    selection.saturating_sub(1)
                } else {
                    (selection + 1).min(len - 1)
                });
                Ok(true)
            }
            ComponentEvent::Input(InputEvent::KeyPress(key)) if app.focus == Focus::History => {
                self.handle_key(*key, app)
            }
            _ => Ok(false),
        }
    }

    crate::impl_component_base!(MoveHistoryComponent);
}

impl Default for MoveHistoryComponent {
    fn default() -> Self {
        Self::new()
    }
}
