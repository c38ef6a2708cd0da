//! Status component: whose turn it is, or who won.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::core::{Component, ComponentId, ComponentResult};
use crate::game_controller::GameStatus;

pub struct StatusComponent {
    id: ComponentId,
}

impl StatusComponent {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
        }
    }
}

impl Component for StatusComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        let status_style = match app.controller.status() {
            GameStatus::Win(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            GameStatus::Draw => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            GameStatus::InProgress => Style::default(),
        };

        let last_step = app.controller.history().len() - 1;
        let text = vec![
            Line::from(Span::styled(app.status_line(), status_style)),
            Line::from(format!("Move {} of {}", app.controller.step(), last_step)),
            Line::from(""),
            Line::from("Tab switch panel  ←↑↓→ cursor  Enter place"),
            Line::from("[ / ] step back/forward  r restart  q quit"),
        ];

        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(paragraph, area);

        Ok(())
    }

    crate::impl_component_base!(StatusComponent);
}

impl Default for StatusComponent {
    fn default() -> Self {
        Self::new()
    }
}
