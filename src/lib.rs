//! # Tic-Tac-Toe with a Rewindable Move History
//!
//! An interactive terminal tic-tac-toe game. Every move is kept as an
//! immutable board snapshot, and the move-history panel lets the player jump
//! back to any earlier position. Moving again from there abandons the
//! discarded future, exactly like branching in browser history.
//!
//! The crate is split into:
//! - [`games`]: the board model and win evaluation
//! - [`game_controller`]: snapshot history, move validation, time travel
//! - [`components`]: the component-based UI architecture
//! - [`app`]: shared application state the components read and mutate
//! - [`tui`]: terminal lifecycle and the main event loop
//!
//! ## Usage
//! Run the `play` binary; click a cell or move the cursor with the arrow
//! keys and press Enter. Click a history row (or Tab over to the panel) to
//! rewind.

pub mod app;
pub mod components;
pub mod game_controller;
pub mod games;
pub mod tui;

pub use app::{App, Focus};
pub use game_controller::{ActionError, GameController, GameStatus, HistoryEntry, MoveResult};
pub use games::tictactoe::{check_win, winning_line, Board, Mark};
