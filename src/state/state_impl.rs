use crate::board::{
    apply_drag_end, Board, ColumnFocusTracker, ContainerKey, DragSession, FocusSurface, Location,
};
use crate::config::hotkeys::ModeHotkeys;
use crate::ui::Theme;
use log::*;
use ratatui::{layout::Rect, widgets::ListState};

use super::navigation::{BoardEvent, Mode};

/// Row cursor per column plus the column holding input focus.
///
/// Focusing a column lands on its first item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    focused: usize,
    rows: Vec<usize>,
}

impl BoardView {
    fn new(columns: usize) -> Self {
        BoardView {
            focused: 0,
            rows: vec![0; columns],
        }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn row(&self, column: usize) -> usize {
        self.rows.get(column).copied().unwrap_or(0)
    }

    fn set_row(&mut self, column: usize, row: usize) {
        if let Some(slot) = self.rows.get_mut(column) {
            *slot = row;
        }
    }

    /// Keep every cursor on an existing item.
    ///
    fn clamp(&mut self, board: &Board) {
        self.rows.resize(board.containers().len(), 0);
        for (row, container) in self.rows.iter_mut().zip(board.containers()) {
            *row = (*row).min(container.len().saturating_sub(1));
        }
    }
}

impl FocusSurface<ContainerKey> for BoardView {
    fn focus(&mut self, index: usize, handle: &ContainerKey) {
        debug!("Focusing column {} ('{}')", index, handle);
        self.focused = index;
        self.set_row(index, 0);
    }
}

/// Houses data representative of application state.
///
pub struct State {
    board: Board,
    focus: ColumnFocusTracker<ContainerKey>,
    view: BoardView,
    drag: Option<DragSession>,
    hotkeys: ModeHotkeys,
    theme: Theme,
    column_areas: Vec<Rect>,
    list_states: Vec<ListState>,
    show_log: bool,
}

impl Default for State {
    fn default() -> Self {
        State::new(Board::default(), ModeHotkeys::default(), Theme::default())
    }
}

impl State {
    /// Return new instance for the given board.
    ///
    pub fn new(board: Board, hotkeys: ModeHotkeys, theme: Theme) -> Self {
        State {
            focus: ColumnFocusTracker::new(board.keys()),
            view: BoardView::new(board.containers().len()),
            list_states: vec![ListState::default(); board.containers().len()],
            board,
            drag: None,
            hotkeys,
            theme,
            column_areas: vec![],
            show_log: false,
        }
    }

    /// Apply one event. Events are handled strictly in the order they arrive.
    ///
    pub fn dispatch(&mut self, event: BoardEvent) -> &mut Self {
        debug!("Processing board event {:?}", event);
        match event {
            BoardEvent::ColumnsReady => {
                self.focus.set_columns(self.board.keys());
                self.focus.initial_focus(&mut self.view);
            }
            BoardEvent::Key(key) => {
                self.focus.on_key(key, &mut self.view);
            }
            BoardEvent::DragStarted(source) => {
                if self.drag.is_some() {
                    warn!("Ignoring drag start at {} during another drag", source);
                } else if self.board.item_at(&source).is_none() {
                    warn!("Ignoring drag start at empty location {}", source);
                } else {
                    info!("Lifted item at {}", source);
                    self.drag = Some(DragSession::lift(source));
                    self.focus.on_drag_start();
                }
            }
            BoardEvent::DragMoved(direction) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.shift(direction, &self.board);
                }
            }
            BoardEvent::DragHovered(target) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.hover(target);
                }
            }
            BoardEvent::DragEnded { cancelled } => {
                if let Some(drag) = self.drag.take() {
                    let result = if cancelled {
                        drag.cancel_result()
                    } else {
                        drag.drop_result()
                    };
                    match &result.destination {
                        Some(destination) => {
                            info!("Dropped item from {} at {}", result.source, destination)
                        }
                        None => info!("Drag from {} ended without a destination", result.source),
                    }
                    self.board = apply_drag_end(&self.board, &result);
                    self.view.clamp(&self.board);
                    if let Some(destination) = &result.destination {
                        if let Some(column) = self.board.position(&destination.container) {
                            self.view.set_row(column, destination.index);
                        }
                    }
                    self.focus.on_drag_end();
                }
            }
        }
        self
    }

    /// Get current input mode.
    ///
    pub fn get_mode(&self) -> Mode {
        if self.drag.is_some() {
            Mode::Dragging
        } else {
            Mode::Browse
        }
    }

    pub fn get_board(&self) -> &Board {
        &self.board
    }

    /// Get the board as it should be drawn: the drop preview while dragging.
    ///
    pub fn get_display_board(&self) -> Board {
        match &self.drag {
            Some(drag) => drag.preview(&self.board),
            None => self.board.clone(),
        }
    }

    /// Location to keep in view while dragging: the drop target, or the
    /// lifted item until a target is chosen.
    ///
    pub fn get_drag_anchor(&self) -> Option<&Location> {
        self.drag
            .as_ref()
            .map(|drag| drag.target().unwrap_or(drag.source()))
    }

    /// Get the id of the item being dragged.
    ///
    pub fn get_dragged_item_id(&self) -> Option<&str> {
        self.drag
            .as_ref()
            .and_then(|drag| self.board.item_at(drag.source()))
            .map(|item| item.id())
    }

    /// Get the key of the container currently dragged over.
    ///
    pub fn get_drag_over_key(&self) -> Option<&ContainerKey> {
        self.drag
            .as_ref()
            .and_then(|drag| drag.target())
            .map(|target| &target.container)
    }

    pub fn get_focused_column(&self) -> usize {
        self.focus.current_index()
    }

    pub fn get_selected_row(&self, column: usize) -> usize {
        self.view.row(column)
    }

    pub fn get_view(&self) -> &BoardView {
        &self.view
    }

    /// Location of the item under the row cursor of the focused column.
    ///
    pub fn get_selected_location(&self) -> Option<Location> {
        let column = self.focus.current_index();
        let container = self.board.containers().get(column)?;
        let row = self.view.row(column);
        if row < container.len() {
            Some(Location::new(container.key.clone(), row))
        } else {
            None
        }
    }

    /// Move the row cursor down in the focused column.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        if self.drag.is_none() {
            let column = self.focus.current_index();
            if let Some(container) = self.board.containers().get(column) {
                let row = self.view.row(column);
                if row + 1 < container.len() {
                    self.view.set_row(column, row + 1);
                }
            }
        }
        self
    }

    /// Move the row cursor up in the focused column.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        if self.drag.is_none() {
            let column = self.focus.current_index();
            let row = self.view.row(column);
            self.view.set_row(column, row.saturating_sub(1));
        }
        self
    }

    pub fn get_hotkeys(&self) -> &ModeHotkeys {
        &self.hotkeys
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Remember where each column was drawn, in board order.
    ///
    pub fn set_column_areas(&mut self, areas: Vec<Rect>) -> &mut Self {
        self.column_areas = areas;
        self
    }

    /// List state of a column, kept across frames so its scroll offset
    /// survives redraws.
    ///
    pub fn column_list_state(&mut self, column: usize) -> &mut ListState {
        if self.list_states.len() <= column {
            self.list_states.resize(column + 1, ListState::default());
        }
        &mut self.list_states[column]
    }

    /// Column and list row for a terminal cell. Border rows hit nothing.
    ///
    fn hit_test(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        self.column_areas
            .iter()
            .enumerate()
            .find(|(_, area)| {
                x >= area.x
                    && x < area.x + area.width
                    && y > area.y
                    && y + 1 < area.y + area.height
            })
            .map(|(column, area)| {
                let offset = self.list_states.get(column).map_or(0, ListState::offset);
                (column, (y - area.y - 1) as usize + offset)
            })
    }

    /// Location of the item drawn at a terminal cell.
    ///
    pub fn item_location_at(&self, x: u16, y: u16) -> Option<Location> {
        let (column, row) = self.hit_test(x, y)?;
        let container = self.board.containers().get(column)?;
        if row < container.len() {
            Some(Location::new(container.key.clone(), row))
        } else {
            None
        }
    }

    /// Drop location for a terminal cell while dragging, or `None` outside
    /// every column.
    ///
    pub fn drop_location_at(&self, x: u16, y: u16) -> Option<Location> {
        let drag = self.drag.as_ref()?;
        let (column, row) = self.hit_test(x, y)?;
        let key = self.board.containers().get(column)?.key.clone();
        let index = row.min(drag.max_index(&self.board, &key));
        Some(Location { container: key, index })
    }
}
