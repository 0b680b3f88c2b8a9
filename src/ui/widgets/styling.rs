use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the background of a column, highlighted while dragged over.
///
pub fn list_style(theme: &Theme, is_dragging_over: bool) -> Style {
    let background = if is_dragging_over {
        theme.drag_over
    } else {
        theme.list_background
    };
    Style::default().bg(background.to_color())
}

/// Return the style of an item, highlighted while it is being dragged.
///
pub fn item_style(theme: &Theme, is_dragging: bool) -> Style {
    let background = if is_dragging {
        theme.dragging
    } else {
        theme.item_background
    };
    Style::default()
        .fg(theme.text.to_color())
        .bg(background.to_color())
}

/// Return the style for the item under the cursor.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Return the style for muted text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}
