//! Status bar UI component.

use crate::app::{App, Phase};
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let text = match app.phase {
        Phase::Rendering => "Rendering...".to_string(),
        Phase::Idle => format!(" [{}] {}", app.mode.name(), app.status),
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
