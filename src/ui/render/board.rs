use super::Frame;
use crate::board::Container;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the board as evenly split columns and remember where each column
/// landed for pointer hit testing.
///
pub fn board(frame: &mut Frame, size: Rect, state: &mut State) {
    let display = state.get_display_board();
    let containers = display.containers();

    if containers.is_empty() {
        let block = Block::default().borders(Borders::ALL).title("Board");
        let text = Paragraph::new("No columns configured")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(text, size);
        state.set_column_areas(vec![]);
        return;
    }

    let count = containers.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(size);

    let dragged_id = state.get_dragged_item_id().map(str::to_string);
    let drag_over = state.get_drag_over_key().cloned();
    let focused = state.get_focused_column();
    let anchor = state.get_drag_anchor().cloned();
    let theme = state.get_theme().clone();

    for (idx, container) in containers.iter().enumerate() {
        let column = Column {
            container,
            is_focused: idx == focused,
            is_dragging_over: drag_over.as_ref() == Some(&container.key),
            dragged_id: dragged_id.as_deref(),
            selected: match &anchor {
                Some(anchor) if anchor.container == container.key => Some(anchor.index),
                Some(_) => None,
                None if idx == focused => Some(state.get_selected_row(idx)),
                None => None,
            },
        };
        render_column(
            frame,
            chunks[idx],
            &column,
            &theme,
            state.column_list_state(idx),
        );
    }

    state.set_column_areas(chunks.to_vec());
}

struct Column<'a> {
    container: &'a Container,
    is_focused: bool,
    is_dragging_over: bool,
    dragged_id: Option<&'a str>,
    selected: Option<usize>,
}

fn render_column(
    frame: &mut Frame,
    size: Rect,
    column: &Column,
    theme: &Theme,
    list_state: &mut ListState,
) {
    let container = column.container;
    let title = format!("{} ({})", container.title, container.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            if column.is_focused {
                styling::active_block_title_style()
            } else {
                styling::muted_text_style(theme)
            },
        ))
        .border_style(if column.is_focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        })
        .style(styling::list_style(theme, column.is_dragging_over));

    if container.is_empty() {
        let empty_text = Paragraph::new("Drop items here")
            .block(block)
            .alignment(Alignment::Center)
            .style(styling::muted_text_style(theme));
        list_state.select(None);
        frame.render_widget(empty_text, size);
        return;
    }

    let items: Vec<ListItem> = container
        .items
        .iter()
        .map(|item| {
            let is_dragging = column.dragged_id == Some(item.id());
            ListItem::new(Line::from(vec![
                Span::raw(if is_dragging { "⠿ " } else { "  " }),
                Span::raw(item.content().to_string()),
            ]))
            .style(styling::item_style(theme, is_dragging))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::current_list_item_style(theme));

    list_state.select(column.selected.map(|row| row.min(container.len() - 1)));
    frame.render_stateful_widget(list, size, list_state);
}
