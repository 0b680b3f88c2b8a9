use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::{Mode, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let title = match state
        .get_hotkeys()
        .for_mode(Mode::Browse)
        .get(&HotkeyAction::ToggleLog)
    {
        Some(hotkey) => format!("Log (Press {} to hide)", format_hotkey_display(hotkey)),
        None => "Log".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let widget = TuiLoggerWidget::default()
        .block(block)
        .output_separator(' ')
        .output_target(false)
        .style(styling::muted_text_style(theme))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow));

    frame.render_widget(widget, size);
}
