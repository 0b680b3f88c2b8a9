//! # dnd-board
//!
//! A terminal board for reordering items within a column and moving them
//! between columns, by keyboard or by mouse drag.
//!
//! The `board` module holds the pure list-editing and focus-tracking logic;
//! everything else is the terminal front-end around it.

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod ui;
