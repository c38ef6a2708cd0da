//! End-to-end scenario tests.
//!
//! These drive the real component tree headlessly: rendering goes through a
//! `TestBackend` terminal, and input arrives as the same component events the
//! live event loop produces from crossterm.

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use ratatui::Terminal;

use tictactoe::app::{App, Focus};
use tictactoe::components::events::{ComponentEvent, InputEvent};
use tictactoe::components::manager::ComponentManager;
use tictactoe::components::ui::GameComponent;
use tictactoe::tui::layout::{self, LayoutConfig};
use tictactoe::{GameStatus, Mark};

const FRAME: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn make_ui() -> (ComponentManager, Terminal<TestBackend>) {
    let mut manager = ComponentManager::new();
    manager.set_root_component(Box::new(GameComponent::new()));
    let terminal = Terminal::new(TestBackend::new(FRAME.width, FRAME.height)).unwrap();
    (manager, terminal)
}

fn draw(manager: &mut ComponentManager, terminal: &mut Terminal<TestBackend>, app: &App) {
    terminal
        .draw(|frame| {
            let area = frame.area();
            manager.render(frame, area, app);
        })
        .unwrap();
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol().to_string())
        .collect()
}

/// Center of the rendered rect for board cell `cell`.
fn cell_click_point(cell: usize) -> (u16, u16) {
    let (board_area, _) = LayoutConfig::default().game_layout(FRAME);
    let inner = Block::default().borders(Borders::ALL).inner(board_area);
    let rect = layout::cell_rects(inner)[cell];
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

/// Top-left of the row for history entry `index` (no scrolling assumed).
fn history_click_point(index: usize) -> (u16, u16) {
    let config = LayoutConfig::default();
    let (_, sidebar) = config.game_layout(FRAME);
    let (_, history_area) = config.sidebar_layout(sidebar);
    let inner = Block::default().borders(Borders::ALL).inner(history_area);
    (inner.x, inner.y + index as u16)
}

fn click(manager: &mut ComponentManager, app: &mut App, (x, y): (u16, u16)) {
    manager.handle_event(&ComponentEvent::Input(InputEvent::MouseClick { x, y }), app);
}

#[test]
fn clicking_cells_plays_a_full_game() {
    let (mut manager, mut terminal) = make_ui();
    let mut app = App::new();
    draw(&mut manager, &mut terminal, &app);

    // X0, O4, X1, O5, X2 completes the top row for X.
    for cell in [0, 4, 1, 5, 2] {
        click(&mut manager, &mut app, cell_click_point(cell));
        draw(&mut manager, &mut terminal, &app);
    }

    assert_eq!(app.controller.status(), GameStatus::Win(Mark::X));
    assert_eq!(app.controller.board().cell(0), Some(Mark::X));
    assert_eq!(app.controller.board().cell(4), Some(Mark::O));

    // Clicks after the win change nothing.
    click(&mut manager, &mut app, cell_click_point(6));
    assert_eq!(app.controller.board().cell(6), None);
    assert_eq!(app.controller.history().len(), 6);

    let text = buffer_text(&terminal);
    assert!(text.contains("Winner: X"), "status not rendered:\n{}", text);
    assert!(text.contains("Go to game start"), "history not rendered:\n{}", text);
    assert!(text.contains("Go to move #5"), "history rows missing:\n{}", text);
}

#[test]
fn clicking_an_occupied_cell_changes_nothing() {
    let (mut manager, mut terminal) = make_ui();
    let mut app = App::new();
    draw(&mut manager, &mut terminal, &app);

    click(&mut manager, &mut app, cell_click_point(4));
    click(&mut manager, &mut app, cell_click_point(4));

    assert_eq!(app.controller.board().cell(4), Some(Mark::X));
    assert_eq!(app.controller.history().len(), 2);
    assert_eq!(app.controller.mark_to_move(), Mark::O);
}

#[test]
fn clicking_a_history_row_rewinds_the_game() {
    let (mut manager, mut terminal) = make_ui();
    let mut app = App::new();
    draw(&mut manager, &mut terminal, &app);

    for cell in [0, 4, 1, 5, 8] {
        click(&mut manager, &mut app, cell_click_point(cell));
        draw(&mut manager, &mut terminal, &app);
    }
    assert_eq!(app.controller.history().len(), 6);

    // Rewind to step 2 by clicking its row.
    click(&mut manager, &mut app, history_click_point(2));
    assert_eq!(app.controller.step(), 2);
    assert_eq!(app.controller.mark_to_move(), Mark::X);
    draw(&mut manager, &mut terminal, &app);
    let text = buffer_text(&terminal);
    assert!(text.contains("Next player: X"), "status not rendered:\n{}", text);

    // Moving from the past discards the abandoned future.
    click(&mut manager, &mut app, cell_click_point(8));
    assert_eq!(app.controller.history().len(), 4);
    assert_eq!(app.controller.step(), 3);
}

#[test]
fn keyboard_history_browsing_jumps_on_enter() {
    use crossterm::event::KeyCode;

    let (mut manager, mut terminal) = make_ui();
    let mut app = App::new();
    draw(&mut manager, &mut terminal, &app);

    for cell in [0, 4, 1] {
        click(&mut manager, &mut app, cell_click_point(cell));
        draw(&mut manager, &mut terminal, &app);
    }

    app.focus = Focus::History;
    manager.handle_event(&ComponentEvent::key(KeyCode::Up), &mut app);
    manager.handle_event(&ComponentEvent::key(KeyCode::Up), &mut app);
    manager.handle_event(&ComponentEvent::key(KeyCode::Enter), &mut app);

    assert_eq!(app.controller.step(), 1);
    assert_eq!(app.controller.mark_to_move(), Mark::O);
}

#[test]
fn cursor_keys_place_marks_when_the_board_has_focus() {
    use crossterm::event::KeyCode;

    let (mut manager, mut terminal) = make_ui();
    let mut app = App::new();
    draw(&mut manager, &mut terminal, &app);

    // Cursor starts on the center cell.
    manager.handle_event(&ComponentEvent::key(KeyCode::Enter), &mut app);
    assert_eq!(app.controller.board().cell(4), Some(Mark::X));

    manager.handle_event(&ComponentEvent::key(KeyCode::Up), &mut app);
    manager.handle_event(&ComponentEvent::key(KeyCode::Left), &mut app);
    manager.handle_event(&ComponentEvent::key(KeyCode::Enter), &mut app);
    assert_eq!(app.controller.board().cell(0), Some(Mark::O));
}
