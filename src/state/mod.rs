//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the board, focus tracker and drag session
//! - Navigation types (Mode, BoardEvent)

mod navigation;

pub use navigation::{BoardEvent, Mode};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{BoardView, State};
