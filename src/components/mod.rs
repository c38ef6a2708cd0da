//! # Component Architecture Module
//!
//! This module provides a component-based architecture for the terminal user
//! interface. Components are self-contained UI elements that manage their own
//! state, handle events, and can be composed hierarchically. Each component
//! carries a stable identity (`ComponentId`), which list-shaped UI such as
//! the board grid and the move history relies on across renders.

pub mod core;
pub mod events;
pub mod manager;
pub mod ui;
