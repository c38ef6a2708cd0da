//! Tic-tac-toe board model and win detection.
//!
//! The board is a flat array of nine cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use std::fmt;
use std::str::FromStr;

/// Cells per side of the square board.
pub const BOARD_SIDE: usize = 3;
/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The eight straight lines that decide a game: three rows, three columns,
/// two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark of the other player.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// X opens the game, so even steps belong to X and odd steps to O.
    pub fn for_step(step: usize) -> Mark {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(format!("expected X or O, got {:?}", other)),
        }
    }
}

/// The nine-cell grid. Cheap to copy; the game history stores one `Board`
/// per move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark occupying `index`, or `None` when the cell is empty or the
    /// index is out of range.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.cell(index).is_some()
    }

    /// Writes `mark` into `index`. Callers validate the index and occupancy
    /// first; see `GameController::select_cell`.
    pub fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(index < CELL_COUNT);
        self.cells[index] = Some(mark);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Flat index for a (row, column) pair.
    pub fn index(row: usize, col: usize) -> usize {
        row * BOARD_SIDE + col
    }

    /// (row, column) pair for a flat index.
    pub fn coords(index: usize) -> (usize, usize) {
        (index / BOARD_SIDE, index % BOARD_SIDE)
    }
}

/// Returns the completed line of three identical marks, if one exists.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        board.cell(a).is_some() && board.cell(a) == board.cell(b) && board.cell(b) == board.cell(c)
    })
}

/// Reports the winning mark, if any line holds three identical marks.
/// Pure and total: any board yields an answer, no error cases.
pub fn check_win(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|line| board.cell(line[0]))
}

/// Human-readable cell name, `a1` top-left through `c3` bottom-right.
/// The letter is the column, the digit the row.
pub fn cell_label(index: usize) -> String {
    let (row, col) = Board::coords(index);
    format!("{}{}", (b'a' + col as u8) as char, row + 1)
}
