//! User interface rendering.

mod controls;
pub mod formatters;
mod keymap_bar;
mod plot_view;
mod status_bar;
mod theme;

use crate::app::App;
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App, layout: &LayoutConfig) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(layout.controls.width), Constraint::Min(10)])
        .split(chunks[0]);

    controls::draw_controls(f, content[0], app, layout, &colors);
    plot_view::draw_plot(
        f,
        content[1],
        &app.scene,
        &app.camera,
        app.palette,
        layout,
        &colors,
    );

    status_bar::draw_status(f, chunks[1], app, &colors);
    keymap_bar::draw_keymap(
        f,
        chunks[2],
        app.mode,
        app.error_message.is_some(),
        &colors,
    );

    if let Some(message) = &app.error_message {
        draw_error(f, app.error_title, message, layout, &colors);
    }
}

fn draw_error(
    f: &mut Frame<'_>,
    title: &str,
    message: &str,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let area = centered_rect(layout.popup.percent_x, layout.popup.percent_y, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.error))
        .style(Style::default().bg(colors.bg));

    let lines = vec![
        Line::from(Span::styled(
            "Nothing was drawn",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(colors.text))),
        Line::from(""),
        Line::from("Press Esc to close"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
