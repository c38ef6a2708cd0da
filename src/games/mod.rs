//! # Game Implementations Module
//!
//! This module contains the board model for the one game the application
//! plays. The game module provides:
//! - A board representation with flat cell indexing
//! - Win-condition evaluation over the fixed line table
//! - Display and parsing implementations for marks
//!
//! Game *progress* (the snapshot history and turn tracking) lives in
//! `crate::game_controller`, which layers move validation and time travel
//! on top of the plain board type defined here.

pub mod tictactoe;
