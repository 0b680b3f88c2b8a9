use super::{board, footer, log, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Min(3)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    board(frame, chunks[0], state);
    if state.is_log_visible() {
        log(frame, chunks[1], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);
}
