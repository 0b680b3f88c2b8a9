use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Mode, State};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format hotkeys for the current mode as a display string.
///
fn format_hotkeys_for_mode(state: &State) -> String {
    let mode = state.get_mode();
    let hotkeys = state.get_hotkeys().for_mode(mode);
    match mode {
        Mode::Browse => format!(
            "{}, mouse: drag",
            build_footer_text(
                hotkeys,
                &[
                    (
                        HotkeyAction::NavigateColumnPrev,
                        "column",
                        Some(HotkeyAction::NavigateColumnNext),
                    ),
                    (
                        HotkeyAction::NavigateItemPrev,
                        "item",
                        Some(HotkeyAction::NavigateItemNext),
                    ),
                    (HotkeyAction::Lift, "lift", None),
                    (HotkeyAction::ToggleLog, "log", None),
                    (HotkeyAction::Quit, "quit", None),
                ],
            )
        ),
        Mode::Dragging => build_footer_text(
            hotkeys,
            &[
                (
                    HotkeyAction::DragLeft,
                    "column",
                    Some(HotkeyAction::DragRight),
                ),
                (
                    HotkeyAction::DragUp,
                    "position",
                    Some(HotkeyAction::DragDown),
                ),
                (HotkeyAction::Drop, "drop", None),
                (HotkeyAction::CancelDrag, "cancel", None),
            ],
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, color) = match state.get_mode() {
        Mode::Browse => (" BROWSE ", theme.footer_browse),
        Mode::Dragging => (" DRAG ", theme.footer_drag),
    };

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format_hotkeys_for_mode(state)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
