//! Keymap help bar UI component.

use crate::plot::Mode;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    mode: Mode,
    error_visible: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if error_visible {
        "Esc/Enter:dismiss | ^C:quit"
    } else {
        match mode {
            Mode::TwoD => {
                "Enter:render | Tab:next field | ^L:clear | F2:3D | ^P:palette | F3:theme | ^Y:copy | ^Q:quit"
            },
            Mode::ThreeD => {
                "Enter:render | Tab:next field | ^L:clear | F2:2D | ^←→↑↓:rotate | ^R:home | ^P:palette | ^Y:copy | ^Q:quit"
            },
        }
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
