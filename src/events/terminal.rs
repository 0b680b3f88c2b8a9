use crate::board::{Direction, NavKey};
use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::error::{AppError, AppResult};
use crate::state::{BoardEvent, Mode, State};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Input(key),
                    Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                    Ok(_) => Event::Tick,
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => Event::Tick,
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(format!("Input channel closed: {}", e)))?;
        match event {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Mouse(mouse) => {
                handle_mouse(mouse, state);
                Ok(true)
            }
            Event::Tick => Ok(true),
        }
    }
}

/// Handle a key press. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    let mode = state.get_mode();
    let action = match get_action_for_event(&event, mode, state.get_hotkeys()) {
        Some(action) => action,
        None => {
            // Unbound keys still reach the focus tracker, which ignores them.
            if mode == Mode::Browse {
                state.dispatch(BoardEvent::Key(NavKey::Other));
            }
            return true;
        }
    };

    debug!("Processing {:?} in {:?} mode...", action, mode);
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NavigateColumnNext => {
            state.dispatch(BoardEvent::Key(NavKey::Right));
        }
        HotkeyAction::NavigateColumnPrev => {
            state.dispatch(BoardEvent::Key(NavKey::Left));
        }
        HotkeyAction::NavigateItemNext => {
            state.next_item();
        }
        HotkeyAction::NavigateItemPrev => {
            state.previous_item();
        }
        HotkeyAction::Lift => {
            if let Some(location) = state.get_selected_location() {
                state.dispatch(BoardEvent::DragStarted(location));
            }
        }
        HotkeyAction::ToggleLog => {
            state.toggle_log();
        }
        HotkeyAction::DragUp => {
            state.dispatch(BoardEvent::DragMoved(Direction::Up));
        }
        HotkeyAction::DragDown => {
            state.dispatch(BoardEvent::DragMoved(Direction::Down));
        }
        HotkeyAction::DragLeft => {
            state.dispatch(BoardEvent::DragMoved(Direction::Left));
        }
        HotkeyAction::DragRight => {
            state.dispatch(BoardEvent::DragMoved(Direction::Right));
        }
        HotkeyAction::Drop => {
            state.dispatch(BoardEvent::DragEnded { cancelled: false });
        }
        HotkeyAction::CancelDrag => {
            state.dispatch(BoardEvent::DragEnded { cancelled: true });
        }
    }
    true
}

/// Handle a mouse event: press lifts, drag hovers, release drops.
///
pub fn handle_mouse(event: MouseEvent, state: &mut State) {
    let (x, y) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(location) = state.item_location_at(x, y) {
                state.dispatch(BoardEvent::DragStarted(location));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if state.get_mode() == Mode::Dragging => {
            let target = state.drop_location_at(x, y);
            state.dispatch(BoardEvent::DragHovered(target));
        }
        MouseEventKind::Up(MouseButton::Left) if state.get_mode() == Mode::Dragging => {
            let target = state.drop_location_at(x, y);
            state
                .dispatch(BoardEvent::DragHovered(target))
                .dispatch(BoardEvent::DragEnded { cancelled: false });
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{numbered_items, Board, Container};
    use crate::config::hotkeys::ModeHotkeys;
    use crate::ui::Theme;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn state() -> State {
        let board = Board::new(vec![
            Container::new("primary", "Items", numbered_items(5, 0)),
            Container::new("secondary", "Selected", numbered_items(5, 5)),
        ])
        .unwrap();
        let mut state = State::new(board, ModeHotkeys::default(), Theme::default());
        state.dispatch(BoardEvent::ColumnsReady);
        state.set_column_areas(vec![Rect::new(0, 0, 20, 12), Rect::new(20, 0, 20, 12)]);
        state
    }

    fn ids(state: &State, key: &str) -> Vec<String> {
        state
            .get_board()
            .get(&key.into())
            .unwrap()
            .items
            .iter()
            .map(|i| i.id().to_string())
            .collect()
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state();
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert!(!handle_key(ctrl_c, &mut state));
        assert!(handle_key(key(KeyCode::Char('x')), &mut state));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = state();
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..key(KeyCode::Right)
        };
        assert!(handle_key(release, &mut state));
        assert_eq!(state.get_focused_column(), 0);
    }

    #[test]
    fn test_keyboard_reorder_scenario() {
        let mut state = state();
        handle_key(key(KeyCode::Char(' ')), &mut state);
        for _ in 0..3 {
            handle_key(key(KeyCode::Down), &mut state);
        }
        handle_key(key(KeyCode::Char(' ')), &mut state);
        assert_eq!(
            ids(&state, "primary"),
            vec!["item-1", "item-2", "item-3", "item-0", "item-4"]
        );
    }

    #[test]
    fn test_arrows_steer_drag_instead_of_focus() {
        let mut state = state();
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Char(' ')), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        assert_eq!(state.get_focused_column(), 0);
        handle_key(key(KeyCode::Up), &mut state);
        handle_key(key(KeyCode::Char(' ')), &mut state);

        assert_eq!(ids(&state, "primary"), vec!["item-0", "item-2", "item-3", "item-4"]);
        assert_eq!(
            ids(&state, "secondary"),
            vec!["item-1", "item-5", "item-6", "item-7", "item-8", "item-9"]
        );
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut state = state();
        let before = state.get_board().clone();
        handle_key(key(KeyCode::Char(' ')), &mut state);
        handle_key(key(KeyCode::Right), &mut state);
        handle_key(key(KeyCode::Esc), &mut state);
        assert_eq!(state.get_board(), &before);
        assert_eq!(state.get_mode(), Mode::Browse);
    }

    #[test]
    fn test_mouse_drag_across_columns() {
        let mut state = state();
        handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), &mut state);
        assert_eq!(state.get_dragged_item_id(), Some("item-1"));
        handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 25, 1), &mut state);
        handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 25, 1), &mut state);

        assert_eq!(ids(&state, "primary"), vec!["item-0", "item-2", "item-3", "item-4"]);
        assert_eq!(ids(&state, "secondary")[0], "item-1");
        assert_eq!(state.get_mode(), Mode::Browse);
    }

    #[test]
    fn test_mouse_release_outside_columns_is_noop() {
        let mut state = state();
        let before = state.get_board().clone();
        handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), &mut state);
        handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 60, 30), &mut state);
        assert_eq!(state.get_board(), &before);
        assert_eq!(state.get_mode(), Mode::Browse);
    }

    #[test]
    fn test_toggle_log_key() {
        let mut state = state();
        handle_key(key(KeyCode::Char('d')), &mut state);
        assert!(state.is_log_visible());
    }
}
