//! # Application State
//!
//! This module defines the `App` struct that the UI components read from and
//! mutate through. It owns the `GameController` (the authoritative game
//! state) plus the purely presentational bits: the keyboard cursor on the
//! board and which panel currently has focus.

use crate::game_controller::{GameController, GameStatus, MoveResult};
use crate::games::tictactoe::{Board, BOARD_SIDE};

/// Which panel keyboard input is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Board,
    History,
}

/// The main application state
pub struct App {
    pub should_quit: bool,
    pub controller: GameController,
    /// Keyboard cursor on the board as (row, column)
    pub board_cursor: (u16, u16),
    pub focus: Focus,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            controller: GameController::new(),
            board_cursor: (1, 1),
            focus: Focus::Board,
        }
    }

    /// Move the board cursor, clamped to the grid.
    pub fn move_cursor(&mut self, d_row: i16, d_col: i16) {
        let max = (BOARD_SIDE - 1) as i16;
        let row = (self.board_cursor.0 as i16 + d_row).clamp(0, max);
        let col = (self.board_cursor.1 as i16 + d_col).clamp(0, max);
        self.board_cursor = (row as u16, col as u16);
    }

    /// Flat index of the cell under the cursor.
    pub fn cursor_cell(&self) -> usize {
        Board::index(self.board_cursor.0 as usize, self.board_cursor.1 as usize)
    }

    /// Try to place the next mark in `cell`. Rejections leave the state
    /// untouched; the controller logs the reason.
    pub fn select_cell(&mut self, cell: usize) -> MoveResult {
        self.controller.select_cell(cell)
    }

    /// Place at the keyboard cursor.
    pub fn select_cursor_cell(&mut self) -> MoveResult {
        self.select_cell(self.cursor_cell())
    }

    /// Jump to a history snapshot, ignoring out-of-range requests.
    pub fn jump_to(&mut self, step: usize) {
        if let Err(reason) = self.controller.jump_to(step) {
            tracing::debug!(%reason, "jump ignored");
        }
    }

    /// Step one snapshot back in history, stopping at the game start.
    pub fn jump_back(&mut self) {
        let step = self.controller.step();
        if step > 0 {
            self.jump_to(step - 1);
        }
    }

    /// Step one snapshot forward, stopping at the newest entry.
    pub fn jump_forward(&mut self) {
        let step = self.controller.step();
        if step + 1 < self.controller.history().len() {
            self.jump_to(step + 1);
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
    }

    /// Start a fresh game.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.board_cursor = (1, 1);
        self.focus = Focus::Board;
    }

    /// The textual status shown above the board.
    pub fn status_line(&self) -> String {
        match self.controller.status() {
            GameStatus::Win(mark) => format!("Winner: {}", mark),
            GameStatus::Draw => String::from("Draw"),
            GameStatus::InProgress => format!("Next player: {}", self.controller.mark_to_move()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
