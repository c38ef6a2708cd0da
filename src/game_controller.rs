//! # Game Controller Module - Central Game State Management
//!
//! This module provides the `GameController` which serves as the single source
//! of truth for the game state. The controller owns an append-only list of
//! board snapshots rather than a single mutable board:
//!
//! - Every accepted move clones the current board, applies the mark, and
//!   appends the result as a new snapshot. Earlier snapshots are never
//!   touched, so the UI can browse back through them at any time.
//! - A step pointer selects which snapshot is "current". Jumping moves the
//!   pointer only; moving after a jump truncates the abandoned future first.
//! - The turn is derived from the step pointer's parity, and the game status
//!   is recomputed from the current snapshot on every query. Nothing is
//!   latched, so rewinding out of a finished game resumes play naturally.

use std::fmt;

use crate::games::tictactoe::{check_win, Board, Mark, CELL_COUNT};

/// Result of attempting to place a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Move was accepted and appended to the history
    Applied {
        /// Cell the mark was placed in
        cell: usize,
        /// The mark that was placed
        mark: Mark,
        /// Step index of the new snapshot
        step: usize,
        /// Winner on the new board, if the move completed a line
        winner: Option<Mark>,
    },
    /// Move was rejected and the state is unchanged
    Rejected {
        /// Reason the move was rejected
        reason: ActionError,
    },
}

/// Reasons the controller rejects a cell selection or a history jump.
/// The UI treats all of these as silent no-ops; they exist so misuse is
/// observable in logs and tests rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// Cell index is not on the board
    CellOutOfRange(usize),
    /// Cell already holds a mark
    CellOccupied(usize),
    /// The current board already has a winner
    GameAlreadyWon(Mark),
    /// Step index does not address a history entry
    StepOutOfRange(usize),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::CellOutOfRange(cell) => write!(f, "cell {} is out of range", cell),
            ActionError::CellOccupied(cell) => write!(f, "cell {} is already occupied", cell),
            ActionError::GameAlreadyWon(mark) => write!(f, "game is already won by {}", mark),
            ActionError::StepOutOfRange(step) => write!(f, "step {} is out of range", step),
        }
    }
}

impl std::error::Error for ActionError {}

/// Current game status, derived from the current snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress
    InProgress,
    /// A line of three is complete
    Win(Mark),
    /// Board is full with no line
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One immutable snapshot in the game history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    board: Board,
    placed: Option<(usize, Mark)>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    fn from_move(board: Board, cell: usize, mark: Mark) -> Self {
        Self {
            board,
            placed: Some((cell, mark)),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot; `None` for the initial entry.
    pub fn placed(&self) -> Option<(usize, Mark)> {
        self.placed
    }
}

/// The central game controller that owns the snapshot history.
///
/// All moves and jumps go through the controller, which validates them
/// before application.
///
/// # Usage
/// ```rust,ignore
/// let mut controller = GameController::new();
///
/// match controller.select_cell(4) {
///     MoveResult::Applied { winner, .. } => { /* state advanced */ }
///     MoveResult::Rejected { reason } => { /* no-op, reason says why */ }
/// }
///
/// controller.jump_to(0)?; // rewind to the empty board
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    /// Board snapshots, oldest first; never empty
    history: Vec<HistoryEntry>,
    /// Index of the snapshot currently displayed
    step: usize,
}

impl GameController {
    /// Create a controller holding a single empty board.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
        }
    }

    /// The currently displayed board.
    pub fn board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Index of the current snapshot. Always `< history().len()`.
    pub fn step(&self) -> usize {
        self.step
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The mark that moves next, by step parity.
    pub fn mark_to_move(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Status of the current snapshot, recomputed on every call.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_win(self.board()) {
            GameStatus::Win(winner)
        } else if self.board().is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Validate a cell selection without applying it.
    pub fn validate_cell(&self, cell: usize) -> Result<(), ActionError> {
        if cell >= CELL_COUNT {
            return Err(ActionError::CellOutOfRange(cell));
        }
        if let Some(winner) = check_win(self.board()) {
            return Err(ActionError::GameAlreadyWon(winner));
        }
        if self.board().is_occupied(cell) {
            return Err(ActionError::CellOccupied(cell));
        }
        Ok(())
    }

    /// Attempt to place the next mark in `cell`.
    ///
    /// On success the history is truncated to the current step (discarding
    /// any snapshots that a previous jump left ahead of it), the current
    /// board is cloned with the mark applied, and the step pointer advances
    /// to the new snapshot.
    pub fn select_cell(&mut self, cell: usize) -> MoveResult {
        if let Err(reason) = self.validate_cell(cell) {
            tracing::debug!(%reason, "move ignored");
            return MoveResult::Rejected { reason };
        }

        let mark = self.mark_to_move();
        self.history.truncate(self.step + 1);

        let mut board = *self.board();
        board.place(cell, mark);
        self.history.push(HistoryEntry::from_move(board, cell, mark));
        self.step = self.history.len() - 1;

        let winner = check_win(&board);
        tracing::debug!(cell, %mark, step = self.step, "move applied");

        MoveResult::Applied {
            cell,
            mark,
            step: self.step,
            winner,
        }
    }

    /// Move the step pointer to an existing snapshot. The history itself is
    /// untouched; the turn follows the pointer's parity automatically.
    pub fn jump_to(&mut self, step: usize) -> Result<(), ActionError> {
        if step >= self.history.len() {
            return Err(ActionError::StepOutOfRange(step));
        }
        self.step = step;
        tracing::debug!(step, "jumped to snapshot");
        Ok(())
    }

    /// Discard everything and start over from one empty board.
    pub fn reset(&mut self) {
        self.history = vec![HistoryEntry::initial()];
        self.step = 0;
        tracing::debug!("game reset");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
