//! Event handling module.
//!
//! This module contains the handler for terminal events: key presses and
//! mouse gestures polled from the terminal and translated into board events.

pub mod terminal;
